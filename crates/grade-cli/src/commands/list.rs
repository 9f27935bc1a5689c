use std::error::Error;

use grade_exercises::catalog;

/// Prints each registered exercise as `id<TAB>summary`.
pub fn run() -> Result<(), Box<dyn Error>> {
    for exercise in catalog() {
        println!("{}\t{}", exercise.id(), exercise.summary());
    }
    Ok(())
}
