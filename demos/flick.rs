// Example: a flick followed by closed-form deceleration, polled at 60fps.
use scroll_logic::{ManualClock, ScrollLogic, ScrollOptions};

fn main() {
    let clock = ManualClock::new(0.0);
    let mut scroller = ScrollLogic::with_clock(ScrollOptions::default(), clock.clone());
    scroller.configure(600.0, 10_000.0);

    // Simulate a finger moving up by 25 units every 16ms.
    let mut now_ms = 0.0;
    let mut touch = 800.0;
    scroller.begin_interaction(touch, now_ms).unwrap();
    for _ in 0..10 {
        now_ms += 16.0;
        touch -= 25.0;
        clock.set(now_ms);
        scroller.interact(touch, now_ms).unwrap();
        println!("drag   t={now_ms:>6.0} offset={}", scroller.current_offset());
    }

    now_ms += 8.0;
    clock.set(now_ms);
    scroller.end_interaction(now_ms).unwrap();
    println!(
        "release velocity={:.2}/frame target={}",
        scroller.deceleration_velocity(),
        scroller.scheduled_offset()
    );

    let mut frame = 0u64;
    while !scroller.is_resting() {
        now_ms += 16.0;
        clock.set(now_ms);
        let offset = scroller.current_offset();
        if frame % 10 == 0 {
            println!("coast  t={now_ms:>6.0} offset={offset}");
        }
        frame += 1;
    }

    println!("rest   t={now_ms:>6.0} offset={}", scroller.current_offset());
}
