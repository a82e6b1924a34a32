use clap::Parser;

use kmap_rs::engine::{solve_expression, truth_table};
use kmap_rs::format::literal_count;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Boolean expression, e.g. "(A + B')(A' + C) + AC'".
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Print the derivation steps.
    #[clap(long)]
    steps: bool,

    /// Print the truth table.
    #[clap(long)]
    table: bool,

    /// Print the prime implicant charts of both forms.
    #[clap(long)]
    chart: bool,

    /// Enable debug logging.
    #[clap(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let res = solve_expression(&args.expr)?;
    let vars: String = res.vars.iter().collect();

    println!("Variables: {}", if vars.is_empty() { "(none)" } else { vars.as_str() });
    println!("SOP:     {}  [{} literals]", res.sop, literal_count(&res.sop));
    println!("POS:     {}  [{} literals]", res.pos, literal_count(&res.pos));
    println!("Minimal: {}", res.minimal);
    println!("{}", res.canonical.sum_of_minterms);
    println!("{}", res.canonical.product_of_maxterms);

    if args.table {
        println!();
        println!("{} | F", vars);
        for row in truth_table(&res.vars, &res.intermediate.minterms) {
            let bits: String = row.bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
            println!("{} | {}", bits, row.output as u8);
        }
    }

    if args.chart {
        println!();
        println!("SOP chart:");
        print!("{}", res.intermediate.sop.cover_chart(&res.intermediate.minterms, &res.vars));
        println!("POS chart (zero rows):");
        print!("{}", res.intermediate.pos.cover_chart(&res.intermediate.maxterms, &res.vars));
    }

    if args.steps {
        println!();
        for (i, step) in res.steps.iter().enumerate() {
            println!("{:>2}. {}", i + 1, step);
        }
    }

    println!();
    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
