use rtcp_dump::{FieldRenderer, ReceiverReportBlock, RenderOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Receiver Report Block Dumps ===\n");

    // Example 1: The classic fixture
    example_fixture()?;

    // Example 2: Byte-sized groups
    example_wide_groups()?;

    // Example 3: Decoding the LSR field
    example_lsr()?;

    Ok(())
}

fn example_fixture() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Example 1: Fixture {{1, 2, 3, 4, 5, 6, 7}} ---");

    let block = ReceiverReportBlock::new(1, 2, 3, 4, 5, 6, 7)?;
    let renderer = FieldRenderer::new(RenderOptions {
        title: true,
        ..RenderOptions::default()
    });
    print!("{}", renderer.render(&block));

    println!();
    Ok(())
}

fn example_wide_groups() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Example 2: Grouped by byte ---");

    let block = ReceiverReportBlock::new(0xDEAD_BEEF, 0x40, 0x00_1234, 0x0001_0010, 42, 0xB710_8000, 0x0002_8000)?;
    let renderer = FieldRenderer::new(RenderOptions {
        title: false,
        block_size: 8,
    });
    print!("{}", renderer.render(&block));

    println!();
    Ok(())
}

fn example_lsr() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Example 3: LSR as an NTP timestamp ---");

    let block = ReceiverReportBlock::new(1, 0, 0, 0, 0, 0xB710_8000, 0)?;
    let lsr = block.last_sr_timestamp();
    print!("{}", lsr);
    println!("  ~ {:.3} s", lsr.as_secs_f64());

    Ok(())
}
