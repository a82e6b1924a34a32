use clap::Parser;

use kmap_rs::groups::{cells_from_expression, cells_from_lists, solve_kmap, solve_kmap_pos};
use kmap_rs::kmap::{build_grid, cyclic_segments, default_var_names, KMapShape};
use kmap_rs::types::CellValue;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of variables (2 to 6).
    #[arg(short, long, value_name = "INT", default_value = "4")]
    vars: u32,

    /// Minterms, separated by spaces or commas.
    #[clap(short, long, value_name = "LIST", default_value = "")]
    minterms: String,

    /// Don't-cares, separated by spaces or commas.
    #[clap(short, long, value_name = "LIST", default_value = "")]
    dont_cares: String,

    /// Load the cells from an expression instead of the lists.
    #[clap(short, long, value_name = "EXPR")]
    expr: Option<String>,

    /// Group the 0-cells into a POS instead.
    #[clap(long)]
    pos: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let (names, cells) = match &args.expr {
        Some(expr) => cells_from_expression(expr)?,
        None => (default_var_names(args.vars), cells_from_lists(&args.minterms, &args.dont_cares, args.vars)?),
    };
    let n = names.len() as u32;
    let shape = KMapShape::new(n)?;

    // Grid with Gray-coded headers
    let (row_labels, col_labels) = shape.axis_labels(&names);
    let width = col_labels.iter().chain(&row_labels).map(|l| l.len()).max().unwrap_or(1).max(1);
    print!("{:width$} |", "", width = width);
    for label in &col_labels {
        print!(" {:>width$}", label, width = width);
    }
    println!();
    for (r, row) in build_grid(&cells, n)?.iter().enumerate() {
        print!("{:>width$} |", row_labels[r], width = width);
        for value in row {
            print!(" {:>width$}", value.to_string(), width = width);
        }
        println!();
    }
    println!();

    let res = if args.pos {
        solve_kmap_pos(&cells, n, Some(&names))?
    } else {
        solve_kmap(&cells, n, Some(&names))?
    };

    for group in &res.groups {
        let rows: Vec<usize> = group.cells.iter().map(|c| c.row).collect();
        let cols: Vec<usize> = group.cells.iter().map(|c| c.col).collect();
        let indices: Vec<u32> = group.cells.iter().map(|c| c.index).collect();
        println!(
            "{:<16} cells {:?} rows {:?} cols {:?}",
            group.label,
            indices,
            cyclic_segments(&rows, shape.rows),
            cyclic_segments(&cols, shape.cols),
        );
    }
    println!();

    let ones = cells.iter().filter(|&&v| v == CellValue::One).count();
    println!("{} ones, {} groups", ones, res.groups.len());
    println!("{} = {}", if args.pos { "POS" } else { "SOP" }, res.expression);

    Ok(())
}
