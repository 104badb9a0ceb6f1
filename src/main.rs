use motion_edit::cli::{Args, Command};
use motion_edit::config::{self, PathConfig, Settings};
use motion_edit::entities::{ActuatorPositions, JointMap, JointPositions};
use motion_edit::MotionEditor;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = PathConfig::from_env_and_cli(args.config_dir.clone());

    init_logging(&args, &path_config)?;
    debug!("Command-line args: {:?}", args);

    match args.command {
        Command::InitConfig { force } => return cmd_init_config(&path_config, force),
        Command::Joints => {
            let joints = resolve_joint_map(&args.joints, &path_config)?;
            for (name, id) in &joints {
                println!("{:<16} {}", name, id);
            }
            return Ok(());
        }
        _ => {}
    }

    let joints = resolve_joint_map(&args.joints, &path_config)?;
    let mut editor = MotionEditor::with_joint_map(joints);

    match args.command {
        Command::List { file } => {
            editor.load(&file)?;
            for name in editor.list_frame_names() {
                println!("{}", name);
            }
        }
        Command::Show { file, name } => {
            editor.load(&file)?;
            match editor.get_frame(&name) {
                Some(frame) => println!("{}", frame),
                None => bail!("no frame named '{}' in {}", name, file.display()),
            }
        }
        Command::Edit {
            file,
            name,
            joints,
            strict,
            arm_only,
            output,
        } => {
            editor.load(&file)?;
            let positions: JointPositions = joints.into_iter().collect();
            if arm_only {
                editor.edit_four_arm_joints(&name, &positions)?;
            } else {
                editor.edit_joints(&name, &positions, strict)?;
            }
            save(&editor, output.unwrap_or(file))?;
        }
        Command::SetId {
            file,
            name,
            actuators,
            output,
        } => {
            editor.load(&file)?;
            let positions: ActuatorPositions = actuators.into_iter().collect();
            editor.edit_actuators(&name, &positions)?;
            save(&editor, output.unwrap_or(file))?;
        }
        Command::Joints | Command::InitConfig { .. } => {}
    }

    Ok(())
}

fn save(editor: &MotionEditor, path: PathBuf) -> Result<()> {
    editor
        .save(&path)
        .with_context(|| format!("saving {}", path.display()))
}

/// `--joints FILE` wins, then the settings file, then the built-in table.
fn resolve_joint_map(cli_joints: &Option<PathBuf>, path_config: &PathConfig) -> Result<JointMap> {
    if let Some(path) = cli_joints {
        return config::load_joint_map(path);
    }
    let settings_path = config::config_file(config::SETTINGS_FILE, path_config);
    Ok(Settings::load(&settings_path)?.joint_to_id)
}

fn cmd_init_config(path_config: &PathConfig, force: bool) -> Result<()> {
    config::ensure_dirs(path_config)?;
    let path = config::config_file(config::SETTINGS_FILE, path_config);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Settings::default().save(&path)?;
    println!("{}", path.display());
    Ok(())
}

fn init_logging(args: &Args, path_config: &PathConfig) -> Result<()> {
    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = match log_path_opt {
            Some(path) => path.clone(),
            None => {
                config::ensure_dirs(path_config)?;
                config::data_file(config::LOG_FILE, path_config)
            }
        };

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .format_timestamp_millis()
            .init();
    }

    Ok(())
}
