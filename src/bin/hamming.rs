use regular_kadane::number::nth_regular;

fn main() -> regular_kadane::Result<()> {
    env_logger::init();

    let n = 12689;
    // Fits in u64: the sequence only leaves u64 range after term 13282.
    let value = nth_regular(n)?;
    println!("The {}th regular number is {}", n, value);
    Ok(())
}
