//! Validators command implementation

use miette::Result;

use kousei_core::ValidatorId;

pub fn run_validators() -> Result<()> {
    println!("{:<20} {:<10} Description", "Name", "Level");
    for id in ValidatorId::ALL {
        println!(
            "{:<20} {:<10} {}",
            id.name(),
            id.granularity(),
            id.description()
        );
    }
    Ok(())
}
