//! Prints relative air mass and the Kt prime factor against refracted zenith.
//!
//! Works without a date or location: the refracted zenith is supplied
//! directly and only the air-mass stages are selected.

use solpos::{Functions, Output, Request, TrigCache, calculate};

fn main() -> Result<(), solpos::Error> {
    let mut request = Request::new();
    request.functions = Functions::AIR_MASS | Functions::PRIME;

    let mut output = Output::new();
    let mut cache = TrigCache::new();

    println!("{:>8} {:>10} {:>10}", "zenith", "air mass", "prime");
    for zenith in (0..=95).step_by(5) {
        request.refracted_zenith = Some(f64::from(zenith));
        calculate(&request, &mut output, &mut cache)?;

        match (output.air_mass(), output.prime()) {
            (Some(air_mass), Some(prime)) => {
                println!("{zenith:>8} {air_mass:>10.3} {prime:>10.4}");
            }
            _ => println!("{zenith:>8} {:>10} {:>10}", "-", "-"),
        }
    }
    Ok(())
}
