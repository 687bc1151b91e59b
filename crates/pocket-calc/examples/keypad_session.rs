//! Keypad Session Demo
//!
//! Clicks through a few calculations on the keypad and prints every frame
//! the render callback receives, then runs the unified scenarios.
//!
//! Run with: RUST_LOG=pocket_calc=debug cargo run --example keypad_session

use pocket_calc::driver::run_all_scenarios;
use pocket_calc::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_frame(display: &Display) {
    println!("   │ {:>16} │", display.previous_line);
    println!("   │ {:>16} │", display.current_line);
    println!("   ├──────────────────┤");
}

fn click_through(calc: &mut Calculator, keypad: &Keypad, ids: &[&str]) {
    for id in ids {
        match keypad.handle_click(id) {
            Some(input) => {
                println!("   click {id:<12} → {}", input.label());
                calc.handle(input);
            }
            None => println!("   click {id:<12} → (no such button)"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════╗");
    println!("║        Pocket Calculator - Keypad        ║");
    println!("╚══════════════════════════════════════════╝");
    println!();

    let keypad = Keypad::new();
    println!("📦 Keypad layout ({} buttons):", keypad.button_count());
    let (rows, cols) = keypad.dimensions();
    for row in 0..rows {
        let labels: Vec<String> = (0..cols)
            .filter_map(|col| keypad.get_button_at(row, col))
            .map(|btn| format!("[{:^3}]", btn.label()))
            .collect();
        println!("   {}", labels.join(" "));
    }
    println!();

    let mut calc = Calculator::new().with_renderer(print_frame);

    println!("\n1️⃣  Chained: 2 + 3 × 4 =");
    click_through(
        &mut calc,
        &keypad,
        &["btn-2", "btn-plus", "btn-3", "btn-times", "btn-4", "btn-equals"],
    );

    println!("\n2️⃣  Percent and sign: 50 % ±");
    calc.reset();
    click_through(&mut calc, &keypad, &["btn-5", "btn-0", "btn-percent", "btn-sign"]);

    println!("\n3️⃣  Division by zero, then clear");
    click_through(
        &mut calc,
        &keypad,
        &["btn-7", "btn-divide", "btn-0", "btn-equals", "btn-9", "btn-clear"],
    );

    println!("\n4️⃣  Unknown button is ignored");
    click_through(&mut calc, &keypad, &["btn-sqrt"]);

    println!("\n🧪 Running unified scenarios against KeypadDriver...");
    let mut driver = KeypadDriver::new();
    run_all_scenarios(&mut driver);
    println!(
        "   ✅ all scenarios passed ({} frames rendered)",
        driver.frames_rendered()
    );
}
