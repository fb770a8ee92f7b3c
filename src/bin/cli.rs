//! BS Options CLI
//!
//! Walkthrough driver: prices the reference contract, shows the Greeks and
//! intermediates, demonstrates strike repricing, then sweeps a strike range
//! and prints the premium table.

use bs_options::prelude::*;

fn run() -> PricingResult<()> {
    println!("BS Options Pricing");
    println!("==================\n");

    // Reference contract
    let spot = 110.70;
    let strike = 100.50;
    let time = 0.55;
    let vol = 0.22;
    let rate = 0.0;

    println!("Contract:");
    println!("  Type: Call");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.2} years", time);
    println!("  Vol: {:.1}%", vol * 100.0);
    println!("  Rate: {:.1}%\n", rate * 100.0);

    let option = EuropeanOption::new(OptionType::Call, spot, strike, time, vol, rate)?;
    let mut engine = BlackScholesEngine::new(option)?;

    println!("Premium: ${:.6}", engine.premium());

    let greeks = engine.greeks()?;
    println!("\nGreeks:");
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.6}", greeks.gamma);
    println!("  Theta: {:.4}", greeks.theta);
    println!("  Vega: {:.4}", greeks.vega);

    println!("\nIntermediates:");
    println!("  d1: {:.6}", engine.d1().unwrap_or(f64::NAN));
    println!("  d2: {:.6}", engine.d2().unwrap_or(f64::NAN));

    // Strike repricing: one down, two up
    println!("\nStrike repricing:");
    let down = engine.decrement_strike()?;
    println!("  Premium at {:.2} strike: ${:.6}", engine.option().strike, down);
    engine.increment_strike()?;
    let up = engine.increment_strike()?;
    println!("  Premium at {:.2} strike: ${:.6}", engine.option().strike, up);

    // Premium table over a strike range
    let start_strike: f64 = 96.50;
    let end_strike: f64 = 104.20;
    let steps = (end_strike.floor() - start_strike.floor()) as usize;
    let interval = (end_strike - start_strike) / steps as f64;

    println!(
        "\nCall premiums for strikes {:.2} to {:.2}:",
        start_strike, end_strike
    );
    for i in 0..=steps {
        let k = start_strike + i as f64 * interval;
        let premium = engine.set_strike(k)?;
        let moneyness = if engine.option().is_itm() { "ITM" } else { "OTM" };
        println!("  strike: {:>7.2}  premium: {:>10.6}  {}", k, premium, moneyness);
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("pricing failed: {e}");
        std::process::exit(1);
    }
}
