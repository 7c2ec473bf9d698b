//! Basic usage of the leveled console proxy and instrumentation wrappers

use console_proxy::prelude::*;
use console_proxy::{info, log, warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Point {
    x: i32,
    y: i32,
}

fn main() -> console_proxy::Result<()> {
    println!("=== Console Proxy Basic Usage ===\n");

    // Proxy over the standard console at the default level (log)
    let console = LeveledSink::new();
    info!(console, "hidden: info is below log");
    log!(console, "visible:", "log");
    warn!(console, "visible:", "warn");

    // Levels can be changed by name; unknown names are rejected
    console.set_level_str("trace")?;
    info!(console, "now info is visible too");
    if let Err(e) = console.set_level_str("loud") {
        console.error(&[format!("rejected: {}", e).into()]);
    }

    // Instrumentation through the process-wide proxy
    let tracer = instrument(LogLevel::Log);
    let point = tracer.class_of(|(x, y): (i32, i32)| Point { x, y });
    let translate = tracer.method("translate", |p: &mut Point, (dx, dy): (i32, i32)| {
        p.x += dx;
        p.y += dy;
        p.x + p.y
    });
    let x = tracer.accessor("x", |p: &Point| p.x, |p: &mut Point, v: i32| p.x = v);
    tracer.property("Point", "y");

    let mut p = point.construct((1, 2));
    translate.call_on(&mut p, (3, 4));
    x.set(&mut p, 10);
    x.get(&p);

    println!("\nFinal point: {:?}", p);
    Ok(())
}
