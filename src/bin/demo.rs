use anyhow::Result;
use gapless_ring::GaplessRing;

fn print_state(ring: &GaplessRing<i32>) {
    println!("{}", ring.state_view());
    println!("{}", ring.values_view());
    println!("-------");
}

fn main() -> Result<()> {
    let mut ring = GaplessRing::new(4, 2)?;

    print_state(&ring);
    ring.push(1);
    print_state(&ring);
    ring.push(2);
    print_state(&ring);
    ring.push(3);
    print_state(&ring);
    ring.push(4);
    print_state(&ring);
    ring.remove(1);
    print_state(&ring);
    ring.push(5);
    print_state(&ring);
    ring.push(9);
    print_state(&ring);
    ring.remove(1);
    print_state(&ring);
    ring.remove(0);
    print_state(&ring);
    ring.remove(0);
    print_state(&ring);
    ring.push(8);
    print_state(&ring);
    ring.remove(0);
    print_state(&ring);
    ring.remove(0);
    print_state(&ring);
    ring.remove(0);
    print_state(&ring);

    for value in 1..=8 {
        ring.push(value);
    }
    print_state(&ring);
    ring.push(9);
    print_state(&ring);
    ring.clear();
    print_state(&ring);

    Ok(())
}
