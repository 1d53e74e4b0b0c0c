//! Entry point: generate a fixed 12h/5min synthetic series, print the
//! analysis report, then page through the three chart views.

use anyhow::Result;
use synthtop::analyze::Analysis;
use synthtop::app::App;
use synthtop::generate::Generator;

fn main() -> Result<()> {
    let table = Generator::new().generate(12.0, 5);
    let analysis = Analysis::compute(&table);
    print!("{}", analysis.report());

    App::new(table, analysis).run()
}
