use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::LevelFilter;

use exact_num::text::Scanner;
use exact_num::Fraction;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("EXACT_NUM_LOG", "warn"))
        .init();

    let mut f1 = Fraction::new(2, 3)?;
    let f2 = Fraction::new(4, 5)?;

    println!("f1: {}, f2: {}", f1, f2);
    println!("f1 + f2: {}", f1.add(&f2)?);
    println!("f1 - f2: {}", f1.sub(&f2)?);
    println!("f1 * f2: {}", f1.mul(&f2)?);
    println!("f1 / f2: {}", f1.div(&f2)?);

    f1.add_in_place(&f2)?;
    println!("After f1 += f2, f1: {}", f1);
    f1.sub_in_place(&f2)?;
    println!("After f1 -= f2, f1: {}", f1);
    f1.mul_in_place(&f2)?;
    println!("After f1 *= f2, f1: {}", f1);
    f1.div_in_place(&f2)?;
    println!("After f1 /= f2, f1: {}", f1);

    println!("f1 as double: {}", f1.to_f64());

    print!("Enter a fraction in the form a/b: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    let f3 = Fraction::read_from(&mut Scanner::new(&line))?;
    println!("You entered: {}", f3);
    Ok(())
}
