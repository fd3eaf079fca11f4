// Example: dragging past the start edge, then snapping back on release.
use scroll_logic::{ManualClock, ScrollLogic, ScrollOptions};

fn run(bouncing: bool) {
    let clock = ManualClock::new(0.0);
    let options = ScrollOptions::new().with_bouncing(bouncing);
    let mut scroller = ScrollLogic::with_clock(options, clock.clone());
    scroller.configure(400.0, 1200.0);

    println!("bouncing={bouncing}");

    // Pull the content down from the top edge.
    let mut now_ms = 0.0;
    let mut touch = 100.0;
    scroller.begin_interaction(touch, now_ms).unwrap();
    for _ in 0..8 {
        now_ms += 16.0;
        touch += 30.0;
        clock.set(now_ms);
        scroller.interact(touch, now_ms).unwrap();
        println!("  pull   t={now_ms:>4.0} offset={}", scroller.current_offset());
    }

    // Hold still, then let go.
    now_ms += 200.0;
    clock.set(now_ms);
    scroller.end_interaction(now_ms).unwrap();

    while !scroller.is_resting() {
        now_ms += 16.0;
        clock.set(now_ms);
        println!("  settle t={now_ms:>4.0} offset={}", scroller.current_offset());
    }
}

fn main() {
    run(true);
    run(false);
}
