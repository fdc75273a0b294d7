//! `spriteview`: inspect and preview assembled actor sprites.
//!
//! ```sh
//! spriteview list
//! spriteview inspect DUKES_SHIP_LEFT --frame 4
//! spriteview --manifest assets/actors.json preview DUKE_LEFT SPIDER
//! spriteview --config my.ini --manifest pack.json save-config
//! ```
//!
//! `preview` is only available with the `preview` feature (raylib).

use std::path::PathBuf;

use actorsprites::actors::{self, ids::ActorId, parts, rules_for};
use actorsprites::error::SpriteResult;
use actorsprites::resources::actorpackage::ManifestPackage;
use actorsprites::resources::spritefactory::SpriteFactory;
use actorsprites::resources::texturestore::HeadlessTextures;
use actorsprites::resources::viewerconfig::{DEFAULT_CONFIG_PATH, ViewerConfig};
use clap::{Parser, Subcommand};
use log::warn;

/// Actor sprite viewer
#[derive(Parser)]
#[command(version, about = "Inspect and preview assembled actor sprites")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Actor package manifest. Overrides the configured one.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every actor with special assembly rules.
    List,
    /// Assemble one actor and print its sprite data.
    Inspect {
        /// Actor id or name.
        actor: ActorId,
        /// Virtual frame to report the rect of.
        #[arg(long, default_value_t = 0)]
        frame: usize,
    },
    /// Write the current settings, overrides included, to the config file.
    SaveConfig,
    /// Open a window showing the actors' default frames.
    #[cfg(feature = "preview")]
    Preview {
        /// Actor ids or names.
        #[arg(required = true)]
        actors: Vec<ActorId>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ViewerConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if let Some(manifest) = cli.manifest {
        config.manifest_path = manifest;
    }

    let result = match cli.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Inspect { actor, frame } => {
            inspect(&config, actor, frame).map_err(|e| e.to_string())
        }
        Command::SaveConfig => config.save_to_file(),
        #[cfg(feature = "preview")]
        Command::Preview { actors } => preview::run(&config, &actors).map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn list() {
    for id in actors::actors_with_rules() {
        let rules = rules_for(id);
        let mut notes = Vec::new();
        if rules.explicit_parts {
            let names: Vec<String> = rules.parts.iter().map(|p| p.to_string()).collect();
            notes.push(format!("parts [{}]", names.join(", ")));
        }
        if let Some(offset) = rules.orientation_offset {
            notes.push(format!("orientation offset {offset}"));
        }
        if !rules.frame_map.is_empty() {
            notes.push(format!("frame map of {}", rules.frame_map.len()));
        }
        if !rules.tweaks.is_empty() {
            let names: Vec<&str> = rules.tweaks.iter().map(|t| t.name()).collect();
            notes.push(format!("tweaks {}", names.join("+")));
        }
        notes.push(format!("layer {:?}", rules.draw_layer));
        if let Some(defaults) = rules.default_frames {
            notes.push(format!("defaults {defaults:?}"));
        }
        println!("{id}: {}", notes.join("; "));
    }
}

fn inspect(config: &ViewerConfig, actor: ActorId, frame: usize) -> SpriteResult<()> {
    let package = ManifestPackage::load(&config.manifest_path)?;
    let mut factory = SpriteFactory::new(package);
    let mut textures = HeadlessTextures::new();

    let data = factory.get_or_build(actor, &mut textures)?;
    let draw_data = &data.draw_data;
    println!("{actor}");
    println!("  parts:              {:?}", parts::resolve_parts(actor).as_slice());
    println!("  part boundaries:    {:?}", data.part_boundaries.as_slice());
    println!("  draw order:         {}", draw_data.draw_order);
    println!("  orientation offset: {:?}", draw_data.orientation_offset);
    println!("  frame map:          {:?}", draw_data.frame_map);
    println!("  initial frames:     {:?}", data.initial_frames.as_slice());
    println!("  frames:");
    for (index, f) in draw_data.frames.iter().enumerate() {
        println!(
            "    {index:3}: offset ({}, {}) size {}x{} px",
            f.draw_offset.x, f.draw_offset.y, f.extents.width, f.extents.height
        );
    }

    let rect = factory.actor_frame_rect(actor, frame, &mut textures)?;
    println!(
        "  frame {frame} rect:      ({}, {}) {}x{} tiles",
        rect.top_left.x, rect.top_left.y, rect.size.width, rect.size.height
    );
    Ok(())
}

#[cfg(feature = "preview")]
mod preview {
    use actorsprites::actors::ids::ActorId;
    use actorsprites::components::actorsprite::ActorSprite;
    use actorsprites::components::mapposition::MapPosition;
    use actorsprites::error::SpriteResult;
    use actorsprites::events::spriteassembly::sprite_assembly_failed_observer;
    use actorsprites::resources::actorpackage::ManifestPackage;
    use actorsprites::resources::spritefactory::SpriteFactory;
    use actorsprites::resources::texturestore::TextureStore;
    use actorsprites::resources::viewerconfig::ViewerConfig;
    use actorsprites::systems::render::render_sprites;
    use actorsprites::systems::spritespawn::spawn_actor_sprites;
    use bevy_ecs::prelude::*;
    use raylib::prelude::*;

    /// Horizontal distance between previewed actors, in tiles.
    const ACTOR_SPACING: i32 = 8;

    pub fn run(config: &ViewerConfig, actors: &[ActorId]) -> SpriteResult<()> {
        let package = ManifestPackage::load(&config.manifest_path)?;

        let mut world = World::new();
        world.insert_resource(config.clone());
        world.insert_resource(SpriteFactory::new(package));
        world.insert_non_send_resource(TextureStore::new());
        world.add_observer(sprite_assembly_failed_observer);

        for (index, actor) in actors.iter().enumerate() {
            world.spawn((
                ActorSprite(*actor),
                MapPosition::new(2 + index as i32 * ACTOR_SPACING, 4),
            ));
        }

        let mut update = Schedule::default();
        update.add_systems(spawn_actor_sprites::<TextureStore>);

        let (width, height) = config.window_size();
        let (mut rl, thread) = raylib::init()
            .size(width as i32, height as i32)
            .resizable()
            .title("spriteview")
            .build();
        rl.set_target_fps(config.target_fps);

        while !rl.window_should_close() {
            update.run(&mut world);
            world
                .non_send_resource_mut::<TextureStore>()
                .upload_pending(&mut rl, &thread);

            let zoom = world.resource::<ViewerConfig>().zoom;
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::DARKGRAY);
            render_sprites(&mut world, &mut d, zoom);
        }
        Ok(())
    }
}
