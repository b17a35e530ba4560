//! Subcommand handlers

use std::io;

use anyhow::{Context, Result};
use serde::Serialize;

use stock_core::export::{export_csv, ledger_rows, ResultTable};
use stock_core::modules::ModuleId;
use stock_core::profiles::ProfileFamily;
use stock_core::shapes::{calculate, CalculationResult, PlateMaterial, ShapeInput};
use stock_core::stock_code::{FinishedGoodCode, ProducerCode, SemiFinishedCode, StockCode};
use stock_core::{load_settings, PanelSettings, Session};

use crate::args::{CodeCommands, GlobalOpts, LedgerArgs, ProfileArgs, SheetArgs, SizesArgs, WeightCommands};
use crate::sheet::{self, Prompter, SheetOutcome};
use crate::table::{render, render_result_table};

/// Settings from `--config` / `STOCKCALC_CONFIG`, or the defaults
pub fn settings(global: &GlobalOpts) -> Result<PanelSettings> {
    match &global.config {
        Some(path) => {
            load_settings(path).with_context(|| format!("loading settings from {}", path.display()))
        }
        None => Ok(PanelSettings::default()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a single calculator result as a one-row table
fn print_single(
    module: ModuleId,
    input: ShapeInput,
    settings: &PanelSettings,
    global: &GlobalOpts,
) -> Result<()> {
    let quantity = calculate(&input, &settings.calc_options())?;
    let result = quantity.map(|quantity| CalculationResult {
        row: 1,
        input,
        quantity,
    });

    if global.json {
        return print_json(&result);
    }
    match result {
        Some(result) => {
            let table = ResultTable::from_results(module, &[result], &settings.number_format());
            println!("{}", render_result_table(&table));
        }
        None => println!("No result: every required measurement must be greater than zero."),
    }
    Ok(())
}

pub fn weight(cmd: WeightCommands, global: &GlobalOpts) -> Result<()> {
    let settings = settings(global)?;
    let (module, input) = match cmd {
        WeightCommands::Plate {
            material,
            thickness,
            width,
            length,
        } => {
            let material = PlateMaterial::from(material);
            let module = match material {
                PlateMaterial::Polymer => ModuleId::PolymerPlate,
                PlateMaterial::Steel => ModuleId::SteelPlate,
            };
            (
                module,
                ShapeInput::Plate {
                    material,
                    thickness_mm: thickness,
                    width_mm: width,
                    length_mm: length,
                },
            )
        }
        WeightCommands::Rod { diameter, length } => (
            ModuleId::RoundRod,
            ShapeInput::RoundRod {
                diameter_mm: diameter,
                length_mm: length,
            },
        ),
        WeightCommands::Hex { across_flats, length } => (
            ModuleId::HexBar,
            ShapeInput::HexBar {
                across_flats_mm: across_flats,
                length_mm: length,
            },
        ),
        WeightCommands::Square { side, length } => (
            ModuleId::SquareBar,
            ShapeInput::SquareBar {
                side_mm: side,
                length_mm: length,
            },
        ),
        WeightCommands::Flat { width, height, length } => (
            ModuleId::FlatBar,
            ShapeInput::FlatBar {
                width_mm: width,
                height_mm: height,
                length_mm: length,
            },
        ),
        WeightCommands::Angle { leg, wall, length } => (
            ModuleId::Angle,
            ShapeInput::Angle {
                leg_mm: leg,
                wall_mm: wall,
                length_mm: length,
            },
        ),
        WeightCommands::Tube {
            outer_diameter,
            wall,
            length,
            inner,
        } => (
            ModuleId::Tube,
            ShapeInput::Tube {
                outer_diameter_mm: outer_diameter,
                wall_mm: wall,
                length_mm: length,
                inner_diameter_mm: inner,
            },
        ),
        WeightCommands::Hollow { length } => (ModuleId::HollowSection, ShapeInput::HollowSection { length_mm: length }),
    };
    print_single(module, input, &settings, global)
}

pub fn profile(args: ProfileArgs, global: &GlobalOpts) -> Result<()> {
    let settings = settings(global)?;
    let input = ShapeInput::RolledProfile {
        family: args.family,
        size_mm: args.size,
        length_mm: args.length,
    };
    print_single(ModuleId::for_family(args.family), input, &settings, global)
}

#[derive(Serialize)]
struct SizeRow {
    size_mm: u32,
    kg_per_m: f64,
}

pub fn sizes(args: SizesArgs, global: &GlobalOpts) -> Result<()> {
    let family: ProfileFamily = args.family;
    if global.json {
        let rows: Vec<SizeRow> = family
            .table()
            .iter()
            .map(|&(size_mm, kg_per_m)| SizeRow { size_mm, kg_per_m })
            .collect();
        return print_json(&rows);
    }

    let fmt = settings(global)?.number_format().ledger();
    let rows = family
        .table()
        .iter()
        .map(|&(size, kg)| [format!("{} {}", family, size), fmt.decimal(kg)]);
    println!("{}", render(["Profile", "kg/m"], rows));
    Ok(())
}

pub fn ledger(args: LedgerArgs, global: &GlobalOpts) -> Result<()> {
    let settings = settings(global)?;
    let entries = ledger_rows(args.family);
    let table = ResultTable::from_ledger(entries.iter().copied(), &settings.number_format().ledger());

    if let Some(path) = &args.export {
        export_csv(&table, path).with_context(|| format!("exporting ledger to {}", path.display()))?;
    }

    if global.json {
        print_json(&entries)
    } else {
        println!("{}", render_result_table(&table));
        Ok(())
    }
}

#[derive(Serialize)]
struct CodeOutput<'a> {
    code: &'a str,
    length: usize,
}

fn print_code(code: &StockCode, global: &GlobalOpts) -> Result<()> {
    if global.json {
        return print_json(&CodeOutput {
            code: code.as_str(),
            length: code.char_len(),
        });
    }
    println!("{}", code);
    println!("Length: {} characters", code.char_len());
    Ok(())
}

pub fn code(cmd: CodeCommands, global: &GlobalOpts) -> Result<()> {
    let code = match cmd {
        CodeCommands::Finished { order, unit, item } => FinishedGoodCode {
            order_no: order,
            unit_code: unit,
            item_no: item,
        }
        .build(),
        CodeCommands::Semi {
            producer,
            order,
            item,
            drawing,
            sub,
        } => {
            let mut subs = sub.into_iter().map(Some);
            SemiFinishedCode {
                producer,
                order_no: order,
                item_no: item,
                drawing_no: drawing,
                sub_positions: [
                    subs.next().flatten(),
                    subs.next().flatten(),
                    subs.next().flatten(),
                ],
            }
            .build()
        }
    };
    print_code(&code, global)
}

pub fn producers(global: &GlobalOpts) -> Result<()> {
    if global.json {
        let rows: Vec<_> = ProducerCode::ALL
            .iter()
            .map(|p| serde_json::json!({ "code": p.code(), "description": p.description() }))
            .collect();
        return print_json(&rows);
    }
    let rows = ProducerCode::ALL.iter().map(|p| [p.code(), p.description()]);
    println!("{}", render(["Code", "Description"], rows));
    Ok(())
}

pub fn modules(global: &GlobalOpts) -> Result<()> {
    if global.json {
        let rows: Vec<_> = ModuleId::ALL
            .iter()
            .map(|m| {
                serde_json::json!({
                    "key": m.key(),
                    "label": m.label(),
                    "rows": m.rows(),
                    "fields": m.fields().iter().map(|f| f.name).collect::<Vec<_>>(),
                    "output": m.unit_label(),
                })
            })
            .collect();
        return print_json(&rows);
    }
    let rows = ModuleId::ALL.iter().map(|m| {
        [
            m.key().to_string(),
            m.label().to_string(),
            m.rows().to_string(),
            m.unit_label().unwrap_or("-").to_string(),
        ]
    });
    println!("{}", render(["Key", "Module", "Rows", "Output"], rows));
    Ok(())
}

pub fn sheet(args: SheetArgs, global: &GlobalOpts) -> Result<()> {
    let settings = settings(global)?;
    let mode = args.mode.map(Into::into).unwrap_or(settings.interaction);

    let mut session = Session::new();
    session.switch_module(args.module);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());

    // Bad rows are reported by the sheet itself
    match sheet::run(&mut session, args.module, &settings, mode, &mut prompter)? {
        SheetOutcome::Results(evaluation) => {
            let table = ResultTable::from_results(args.module, &evaluation.results, &settings.number_format());
            if let Some(path) = &args.export {
                export_csv(&table, path).with_context(|| format!("exporting results to {}", path.display()))?;
            }
            if global.json {
                print_json(&evaluation)?;
            } else if table.is_empty() {
                println!("No complete rows.");
            } else {
                println!("{}", render_result_table(&table));
            }
        }
        SheetOutcome::Code(code) => print_code(&code, global)?,
        SheetOutcome::Ledger(entry) => {
            if global.json {
                print_json(entry)?;
            } else {
                let table = ResultTable::from_ledger([entry], &settings.number_format().ledger());
                println!("{}", render_result_table(&table));
            }
        }
    }
    Ok(())
}
