use bit_view::{BitView, MaskPolicy};

fn main() {
    println!("=== Bit View Examples ===\n");

    // Example 1: The classic 32-bit rendering
    let _ = example_grouping();

    // Example 2: Reading individual bits
    let _ = example_bit_access();

    // Example 3: Masking policies
    let _ = example_policies();
}

fn example_grouping() -> Result<(), bit_view::BitViewError> {
    println!("Example 1: 0xB710 as a 32-bit value");

    let view = BitView::new(32, 0xB710)?;

    println!("  Grouped by 4: {}", view);
    println!("  Grouped by 8: {}", view.to_string_grouped(8));
    println!("  Ungrouped:    {}", view.to_string_grouped(0));
    println!();

    Ok(())
}

fn example_bit_access() -> Result<(), bit_view::BitViewError> {
    println!("Example 2: Flags in a 5-bit field");

    let flags = BitView::new(5, 0b10110)?;

    for (i, bit) in flags.iter().enumerate() {
        println!("  bit {}: {}", i, if bit { "set" } else { "clear" });
    }
    println!("  As unsigned: {}", flags.to_u64());
    println!("  As signed:   {}", flags.to_i64());
    println!();

    Ok(())
}

fn example_policies() -> Result<(), bit_view::BitViewError> {
    println!("Example 3: Exact vs legacy masking");

    let exact = BitView::with_policy(12, 0xFFFF, MaskPolicy::Exact)?;
    let legacy = BitView::with_policy(12, 0xFFFF, MaskPolicy::Legacy)?;

    println!("  Exact:  {} bytes={:02X?}", exact, exact.as_bytes());
    println!("  Legacy: {} bytes={:02X?}", legacy, legacy.as_bytes());

    Ok(())
}
