mod cli;

use clap::Parser;
use log::{error, info};

use huffman_codes::{
    CodeReport, Result, build_code_table, build_huffman_tree, count_symbols, entropy_from_freq,
};

use crate::cli::Cli;

fn run(cli: &Cli) -> Result<()> {
    let text = cli.input_text()?;
    let freq = count_symbols(&text);

    let tree = build_huffman_tree(&freq)?;
    let codes = build_code_table(&tree);
    info!(
        "Built codes for {} symbols ({} internal nodes)",
        tree.leaf_count(),
        tree.internal_count()
    );

    let report = CodeReport::new(&tree, &codes).sorted(cli.sort);
    print!("{}", report);

    if cli.stats {
        println!(
            "\nTotal symbols:   {}\n\
             Entropy:         {:.4} bits/symbol\n\
             Average length:  {:.4} bits/symbol\n\
             Encoded size:    {} bits",
            report.total_freq(),
            entropy_from_freq(&freq),
            report.average_code_len(),
            report.encoded_bits()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
