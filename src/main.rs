//! Headless front-end standing in for the browser pages: a line-command loop
//! over the player core.
use melomix::app::MeloMixApp;
use melomix::constants::{SEEK_STEP_SECS, VOLUME_STEP};
use melomix::data::catalog;
use melomix::models::Track;
use melomix::services::LogNotifier;
use melomix::state::playback::MediaElement;
use melomix::storage::FileStorage;
use melomix::utils::audio_controller::AudioController;
use melomix::utils::formatting::format_duration;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "MeloMix";

fn main() {
    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let element: Box<dyn MediaElement> = Box::new(AudioController::new());
    let mut app = MeloMixApp::new(
        Arc::new(FileStorage::new()),
        element,
        Arc::new(LogNotifier),
    );

    println!("{} v{} - type 'help' for commands", APP_NAME, APP_VERSION);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        app.poll();

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "tracks" | "home" => print_tracks(catalog::all_tracks()),
            "tags" => println!("{}", catalog::all_tags().join(", ")),
            "genres" => println!("{}", catalog::all_genres().join(", ")),
            "browse" => print_tracks(&catalog::filter_tracks(Some(rest), &[])),
            "recs" => print_tracks(&app.recommendations()),
            "search" => run_search(&mut app, rest),
            "library" => print_tracks(&app.library.load()),
            "save" => {
                if let Some(track) = find_track(&app, rest) {
                    app.library.add(&track);
                }
            }
            "unsave" => {
                app.library.remove(rest);
            }
            "playlists" => {
                for playlist in app.playlists.load() {
                    println!(
                        "{:<10} {} ({} tracks)",
                        playlist.id,
                        playlist.name,
                        playlist.track_ids.len()
                    );
                }
            }
            "playlist" => match app.playlists.get(rest) {
                Some(playlist) => print_tracks(&app.playlist_tracks(&playlist)),
                None => println!("No playlist '{}'", rest),
            },
            "pladd" | "plrm" => {
                let Some((playlist_id, track_id)) = rest.split_once(' ') else {
                    println!("Usage: {} <playlist-id> <track-id>", command);
                    continue;
                };
                if command == "pladd" {
                    if let Some(track) = find_track(&app, track_id.trim()) {
                        app.playlists.add_track(playlist_id, &track);
                    }
                } else {
                    app.playlists.remove_track(playlist_id, track_id.trim());
                }
            }
            "play" => {
                if let Some(track) = find_track(&app, rest) {
                    // Queue follows the list the track came from
                    let context = context_for(&app, &track.id);
                    app.play_from(&context, &track.id);
                }
            }
            "pause" | "resume" | "toggle" => app.playback.toggle_playback(),
            "next" => app.playback.next_track(),
            "prev" => app.playback.previous_track(),
            "seek" => {
                let target = rest.parse::<u64>().unwrap_or(0);
                // Slider semantics: clamp to [0, duration] here, not in the core
                let clamped = target.min(app.playback.duration_secs());
                app.playback.seek(Duration::from_secs(clamped));
            }
            "fwd" => {
                let pos = app.playback.position().as_secs() + SEEK_STEP_SECS;
                let clamped = pos.min(app.playback.duration_secs());
                app.playback.seek(Duration::from_secs(clamped));
            }
            "vol" => match rest.parse::<f32>() {
                Ok(v) => app.playback.set_volume(v),
                Err(_) => println!("Usage: vol <0.0-1.0>"),
            },
            "vol+" => {
                let v = (app.playback.effective_volume() + VOLUME_STEP).min(1.0);
                app.playback.set_volume(v);
            }
            "vol-" => {
                let v = (app.playback.effective_volume() - VOLUME_STEP).max(0.0);
                app.playback.set_volume(v);
            }
            "mute" => app.playback.toggle_mute(),
            "status" => print_status(&app),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}', try 'help'", other),
        }
    }

    log::info!("[Main] Shutting down");
}

fn print_help() {
    println!("tracks | tags | genres | browse <genre> | recs");
    println!("search <query>   ('#tag' searches tags)");
    println!("library | save <track-id> | unsave <track-id>");
    println!("playlists | playlist <id> | pladd <id> <track-id> | plrm <id> <track-id>");
    println!("play <track-id> | toggle | next | prev | seek <secs> | fwd | vol <0-1> | vol+ | vol- | mute");
    println!("status | quit");
}

fn print_tracks(tracks: &[Track]) {
    for track in tracks {
        println!(
            "{:<14} {:<45} {:>6}  {}",
            track.id,
            track.display(),
            format_duration(track.duration),
            track.genre
        );
    }
}

fn run_search(app: &mut MeloMixApp, query: &str) {
    app.run_search(query);
    while app.search.online_loading {
        app.poll();
        std::thread::sleep(Duration::from_millis(100));
    }

    println!("-- Local results --");
    print_tracks(&app.search.local_results);
    println!("-- Online results --");
    print_tracks(&app.search.online_results);
}

/// Resolve a track id across everything currently visible: catalog, online
/// search results and the saved library
fn find_track(app: &MeloMixApp, track_id: &str) -> Option<Track> {
    catalog::track_by_id(track_id)
        .cloned()
        .or_else(|| {
            app.search
                .online_results
                .iter()
                .find(|t| t.id == track_id)
                .cloned()
        })
        .or_else(|| app.library.load().into_iter().find(|t| t.id == track_id))
        .or_else(|| {
            println!("No track '{}'", track_id);
            None
        })
}

fn context_for(app: &MeloMixApp, track_id: &str) -> Vec<Track> {
    if app.search.online_results.iter().any(|t| t.id == track_id) {
        app.search.online_results.clone()
    } else {
        catalog::all_tracks().to_vec()
    }
}

fn print_status(app: &MeloMixApp) {
    match &app.playback.current_track {
        Some(track) => {
            println!(
                "{} [{}] {}/{}  vol {:.2}{}",
                track.display(),
                if app.playback.is_playing { "playing" } else { "paused" },
                format_duration(app.playback.position().as_secs()),
                format_duration(app.playback.duration_secs()),
                app.playback.effective_volume(),
                if app.playback.muted { " (muted)" } else { "" }
            );
        }
        None => println!("Nothing playing"),
    }
}
