use std::env;

fn main() {
    // The mcu link arg only applies to AVR builds; host builds run the
    // test suite and must stay linkable.
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega128");
    }
}
