use anyhow::Result;
use log::LevelFilter;

use exact_num::RealVector;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("EXACT_NUM_LOG", "warn"))
        .init();

    let mut v1 = RealVector::from([6.0, 9.0, 1.0]);
    let v2 = RealVector::from([7.0, 8.0, 1.0]);

    let v3 = v1.add(&v2)?;
    let v4 = v1.sub(&v2)?;
    v1.add_in_place(&v2)?;
    v1.sub_in_place(&v2)?;

    let v5 = &v1 * 2.0;
    let v6 = 3.0 * &v2;
    let dot = v1.dot(&v2)?;

    println!("v1: {}", v1);
    println!("v2: {}", v2);
    println!("v3: {}", v3);
    println!("v4: {}", v4);
    println!("v5: {}", v5);
    println!("v6: {}", v6);
    println!("Dot product: {}", dot);
    Ok(())
}
