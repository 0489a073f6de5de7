//! Pong Duel entry point
//!
//! No native windowing toolkit is wired up; running the binary plays a
//! short self-driving demo match on the real clock and logs the outcome.
//! A host integration would construct `App` with its own `DisplaySink`
//! and feed it key/resize events.

use pong_duel::app::{App, AppEvent, SystemClock};
use pong_duel::display::RecordingDisplay;
use pong_duel::input::Key;
use pong_duel::sim::MatchPhase;

fn main() {
    env_logger::init();
    log::info!("Pong Duel starting (headless demo match)");

    let mut app = App::new(SystemClock, RecordingDisplay::default());

    // Hold both paddles on their "up" keys and let the rally play out;
    // quit after the first point lands.
    app.push(AppEvent::Key {
        key: Key::Char('w'),
        pressed: true,
    });
    app.push(AppEvent::Key {
        key: Key::Up,
        pressed: true,
    });
    app.push(AppEvent::Resize {
        width: 1024,
        height: 768,
    });

    let mut quit_sent = false;
    while app.world.phase != MatchPhase::Quit {
        if !app.step() {
            break;
        }
        if !quit_sent && app.world.score.left + app.world.score.right >= 1 {
            app.push(AppEvent::Key {
                key: Key::Escape,
                pressed: true,
            });
            quit_sent = true;
        }
    }

    log::info!(
        "demo finished at tick {}: {} - {} ({} frames presented)",
        app.world.time_ticks,
        app.world.score.left,
        app.world.score.right,
        app.display().presented
    );
}
