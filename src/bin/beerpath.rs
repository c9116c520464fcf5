use beerpath::{CONFIG, init_with_canvas, run_headless};

fn main() -> Result<(), String> {
    env_logger::init();

    if CONFIG.headless {
        run_headless(&CONFIG)?;
    }
    else {
        init_with_canvas(&CONFIG)?;
    }

    Ok(())
}
