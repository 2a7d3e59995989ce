extern crate clap;
use clap::*;

mod cmd_levmap;

fn main() -> anyhow::Result<()> {
    let app = Command::new("levmap")
        .version(crate_version!())
        .about("`levmap` - resolution-adaptive pairwise distance maps over a genome")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_levmap::map::make_subcommand())
        .after_help(
            r###"Subcommands:

* map - All-pairs windowed Levenshtein distances of a genome sequence

"###,
        );

    // Check which subcommand the user ran...
    match app.get_matches().subcommand() {
        Some(("map", sub_matches)) => cmd_levmap::map::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
