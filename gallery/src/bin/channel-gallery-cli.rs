use channel_gallery::{
    ClientError, DEFAULT_PLAYLIST_VIDEOS, DEFAULT_PLAYLISTS, DEFAULT_RECENT_VIDEOS, DateStyle,
    GalleryConfig, Gateway, Playlist, Video,
};
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: channel-gallery-cli <command>

commands:
  name                       print the channel's display name
  recent [max]               list the most recent uploads
  playlists [max]            list the channel's playlists
  playlist <id> [max]        list the videos of a playlist
  video <id>                 show one video";

#[derive(Debug, PartialEq)]
enum Command {
    Name,
    Recent(u32),
    Playlists(u32),
    Playlist(String, u32),
    Video(String),
}

fn parse_max(raw: Option<String>, default: u32) -> eyre::Result<u32> {
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("parse max results from '{raw}'")),
        None => Ok(default),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> eyre::Result<Command> {
    let command = args.next().ok_or_else(|| eyre::eyre!("missing command"))?;

    let command = match command.as_str() {
        "name" => Command::Name,
        "recent" => Command::Recent(parse_max(args.next(), DEFAULT_RECENT_VIDEOS)?),
        "playlists" => Command::Playlists(parse_max(args.next(), DEFAULT_PLAYLISTS)?),
        "playlist" | "video" => {
            // ids are passed through as-is; only their presence is checked
            let id = args
                .next()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| eyre::eyre!("'{command}' needs an id"))?;
            if command == "video" {
                Command::Video(id)
            } else {
                Command::Playlist(id, parse_max(args.next(), DEFAULT_PLAYLIST_VIDEOS)?)
            }
        }
        other => eyre::bail!("unknown command '{other}'"),
    };
    Ok(command)
}

fn print_video(video: &Video) {
    println!(
        "{}\t{}\t{}\t{}",
        video.id,
        video.published_on(DateStyle::Short),
        video.duration_label().unwrap_or_else(|| "-".to_string()),
        video.title
    );
}

fn print_playlist(playlist: &Playlist) {
    println!(
        "{}\t{}\t{}",
        playlist.id,
        playlist.video_count_label(),
        playlist.title
    );
}

fn report(error: ClientError) -> eyre::Report {
    eyre::eyre!("{error} ({}, status {})", error.reason(), error.status())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e:#}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let gateway = Gateway::new(GalleryConfig::from_env());
    tracing::debug!(channel_id = gateway.channel_id(), ?command, "running");

    match command {
        Command::Name => println!("{}", gateway.get_channel_name().await),
        Command::Recent(max) => {
            for video in gateway.get_recent_videos(max).await.map_err(report)? {
                print_video(&video);
            }
        }
        Command::Playlists(max) => {
            for playlist in gateway.get_playlists(max).await.map_err(report)? {
                print_playlist(&playlist);
            }
        }
        Command::Playlist(id, max) => {
            let videos = gateway
                .get_playlist_videos(&id, max)
                .await
                .map_err(report)?;
            if videos.is_empty() {
                eprintln!("playlist {id} has no videos");
            }
            for video in &videos {
                print_video(video);
            }
        }
        Command::Video(id) => {
            let video = gateway.get_video_details(&id).await.map_err(report)?;
            print_video(&video);
            println!("{}", video.embed_url());
            if !video.description.is_empty() {
                println!("\n{}", video.description);
            }
        }
    }

    Ok(())
}
