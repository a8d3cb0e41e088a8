//! taggen: print a build tag such as `1.83-brave-otter`.
//!
//! Only the first argument is looked at; anything unrecognized prints the
//! full tag. Always exits 0.

use clap::Parser;
use rand::rngs::OsRng;

use mjolnir::build_info::RUNTIME_VERSION;
use mjolnir::tag::TagCommand;

/// Print a build tag: <rust-version>-<adjective>-<noun>
#[derive(Parser, Debug, Default)]
#[command(name = "taggen")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// --name, --version, --help/-h, or nothing for the full tag
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let args = Args::try_parse().unwrap_or_default();
    let command = TagCommand::from_arg(args.args.first().map(String::as_str));

    println!("{}", command.render(RUNTIME_VERSION, &mut OsRng));
}
