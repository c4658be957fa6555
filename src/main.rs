//! Staxie viewer entry point.
//!
//! Loads a staxie PNG and either prints its animation catalog as JSON
//! (`--inspect`) or opens a raylib window and plays one sprite stack in the
//! middle of it.
//!
//! # Controls
//!
//! - `Tab` – switch to the next stack, keeping the animation if it exists
//! - `Space` – switch to the next animation of the current stack
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- assets/knight.png --stack top --animation walk
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;

use staxie::components::mapposition::MapPosition;
use staxie::components::rotation::Rotation;
use staxie::components::spritestack::SpriteStack;
use staxie::format::decode_layout;
use staxie::raylib_image::load_sheet_textures;
use staxie::resources::sheetstore::SheetStore;
use staxie::resources::stackconfig::StackConfig;
use staxie::sheet::Sheet;
use staxie::systems::animation::{spin_sprite_stacks, sprite_stack_animation};
use staxie::systems::render::render_sprite_stacks;

const SHEET_KEY: &str = "sheet";

/// Staxie sprite stack viewer
#[derive(Parser)]
#[command(version, about = "Inspect and play staxie sprite stack sheets.")]
struct Cli {
    /// Staxie PNG to load.
    file: PathBuf,

    /// Print the decoded catalog as JSON and exit.
    #[arg(long)]
    inspect: bool,

    /// Stack to play (default: first stack in the sheet).
    #[arg(long, value_name = "NAME")]
    stack: Option<String>,

    /// Animation to play (default: first animation of the stack).
    #[arg(long, value_name = "NAME")]
    animation: Option<String>,

    /// INI configuration file (default: ./staxie.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let bytes = match std::fs::read(&cli.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read {}: {e}", cli.file.display());
            std::process::exit(1);
        }
    };

    if cli.inspect {
        match decode_layout(&bytes).map(|sheet| serde_json::to_string_pretty(&sheet)) {
            Ok(Ok(json)) => println!("{json}"),
            Ok(Err(e)) => {
                error!("Failed to serialize sheet: {e}");
                std::process::exit(1);
            }
            Err(e) => {
                error!("Failed to decode {}: {e}", cli.file.display());
                std::process::exit(1);
            }
        }
        return;
    }

    let mut config = match &cli.config {
        Some(path) => StackConfig::with_path(path),
        None => StackConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("Config file not found or invalid, using defaults: {e}");
    }

    let (mut rl, th) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("staxie")
        .build();
    rl.set_target_fps(config.ticks_per_second);

    let sheet = match load_sheet_textures(&mut rl, &th, &bytes) {
        Ok(sheet) => sheet,
        Err(e) => {
            error!("Failed to load {}: {e}", cli.file.display());
            std::process::exit(1);
        }
    };

    let Some(stack_name) = cli
        .stack
        .clone()
        .or_else(|| sheet.stacks.first().map(|s| s.name.clone()))
    else {
        error!("{} has no stacks", cli.file.display());
        std::process::exit(1);
    };
    let animation_name = cli
        .animation
        .clone()
        .or_else(|| {
            sheet
                .stack(&stack_name)
                .and_then(|s| s.animations.first())
                .map(|a| a.name.clone())
        })
        .unwrap_or_default();
    info!("Playing {stack_name:?} / {animation_name:?}");

    let mut world = World::new();
    let sprite = SpriteStack::new(SHEET_KEY, &sheet, &stack_name, &animation_name)
        .with_frame_rate(config.frame_rate())
        .with_scale(config.scale);
    if sprite.cursor.animation_name(&sheet).is_none() {
        warn!("{stack_name:?} / {animation_name:?} not found in sheet, nothing will be drawn");
    }
    let entity = world
        .spawn((
            sprite,
            MapPosition::new(
                config.window_width as f32 / 2.0,
                config.window_height as f32 / 2.0,
            ),
            Rotation::default(),
        ))
        .id();

    let mut store = SheetStore::<Texture2D>::new();
    store.insert(SHEET_KEY, sheet);
    world.insert_resource(store);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems((sprite_stack_animation::<Texture2D>, spin_sprite_stacks));

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            cycle_stack(&mut world, entity);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            cycle_animation(&mut world, entity);
        }

        update.run(&mut world);

        let mut d = rl.begin_drawing(&th);
        d.clear_background(Color::RAYWHITE);
        render_sprite_stacks(&mut world, &mut d);
        d.draw_fps(10, 10);
    }
}

/// Name following the current one in `names`, wrapping around.
fn next_name<'a>(names: impl Iterator<Item = &'a str>, current: Option<&str>) -> Option<String> {
    let names: Vec<&str> = names.collect();
    let next = match current.and_then(|c| names.iter().position(|n| *n == c)) {
        Some(i) => (i + 1) % names.len(),
        None => 0,
    };
    names.get(next).map(|n| n.to_string())
}

fn with_sheet_and_sprite(
    world: &mut World,
    entity: Entity,
    f: impl FnOnce(&Sheet<Texture2D>, &mut SpriteStack),
) {
    let store = world.resource::<SheetStore<Texture2D>>();
    let Some(sheet) = store.get(SHEET_KEY).cloned() else {
        return;
    };
    if let Some(mut sprite) = world.get_mut::<SpriteStack>(entity) {
        f(&sheet, &mut sprite);
    }
}

fn cycle_stack(world: &mut World, entity: Entity) {
    with_sheet_and_sprite(world, entity, |sheet, sprite| {
        let current = sprite.cursor.stack_name(sheet);
        if let Some(next) = next_name(sheet.stacks.iter().map(|s| s.name.as_str()), current) {
            sprite.cursor.bind_stack(sheet, &next);
            info!(
                "Stack {next:?}, animation {:?}",
                sprite.cursor.animation_name(sheet)
            );
        }
    });
}

fn cycle_animation(world: &mut World, entity: Entity) {
    with_sheet_and_sprite(world, entity, |sheet, sprite| {
        let Some(stack) = sprite.cursor.stack(sheet) else {
            return;
        };
        let current = sprite.cursor.animation_name(sheet);
        if let Some(next) = next_name(stack.animations.iter().map(|a| a.name.as_str()), current) {
            sprite.cursor.bind_animation(sheet, &next);
            info!("Animation {next:?}");
        }
    });
}
