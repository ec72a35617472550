use std::io::Read;

use miette::*;

use mirror_safe::process;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .into_diagnostic()?;
    let result = process(&input)?;
    println!("{}", result);
    Ok(())
}
