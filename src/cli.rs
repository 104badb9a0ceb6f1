use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "YAML:   serde_yml\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Robot motion sequence editor
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging to file (default: motion_edit.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE", global = true)]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// JSON file with a {"joint": id} table, overrides the configured one
    #[arg(short = 'j', long = "joints", value_name = "FILE", global = true)]
    pub joints: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List frame names in document order
    List {
        /// Motion YAML file
        file: PathBuf,
    },

    /// Print one frame
    Show {
        /// Motion YAML file
        file: PathBuf,
        /// Frame name (first match)
        name: String,
    },

    /// Set joint positions by joint name, then save
    Edit {
        /// Motion YAML file
        file: PathBuf,
        /// Frame name (first match)
        name: String,
        /// Joint assignments in radians, e.g. rotate_1=0.33
        #[arg(id = "joint_assignments", value_name = "JOINT=RAD", required = true, value_parser = parse_joint_assignment)]
        joints: Vec<(String, f64)>,
        /// Fail on joint names missing from the joint map
        #[arg(long)]
        strict: bool,
        /// Only apply torso and arm joints
        #[arg(long = "arm-only", conflicts_with = "strict")]
        arm_only: bool,
        /// Write here instead of overwriting FILE
        #[arg(short = 'o', long = "output", value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Set positions by raw actuator id, then save
    SetId {
        /// Motion YAML file
        file: PathBuf,
        /// Frame name (first match)
        name: String,
        /// Actuator assignments in radians, e.g. 22=0.5
        #[arg(value_name = "ID=RAD", required = true, value_parser = parse_id_assignment)]
        actuators: Vec<(i32, f64)>,
        /// Write here instead of overwriting FILE
        #[arg(short = 'o', long = "output", value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Print the active joint name -> id table
    Joints,

    /// Write default settings to the config directory
    InitConfig {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn split_assignment(s: &str) -> Result<(&str, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=RAD, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    let rad = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad position in '{}': {}", s, e))?;
    Ok((key, rad))
}

/// Parse `joint=rad`
pub fn parse_joint_assignment(s: &str) -> Result<(String, f64), String> {
    split_assignment(s).map(|(key, rad)| (key.to_string(), rad))
}

/// Parse `id=rad`
pub fn parse_id_assignment(s: &str) -> Result<(i32, f64), String> {
    let (key, rad) = split_assignment(s)?;
    let id = key
        .parse::<i32>()
        .map_err(|e| format!("bad actuator id in '{}': {}", s, e))?;
    Ok((id, rad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_joint_assignment() {
        assert_eq!(parse_joint_assignment("rotate_1=0.33"), Ok(("rotate_1".to_string(), 0.33)));
        assert_eq!(parse_joint_assignment(" rotate_7 = -0.11"), Ok(("rotate_7".to_string(), -0.11)));
        assert!(parse_joint_assignment("rotate_1").is_err());
        assert!(parse_joint_assignment("=1.0").is_err());
        assert!(parse_joint_assignment("rotate_1=abc").is_err());
    }

    #[test]
    fn test_parse_id_assignment() {
        assert_eq!(parse_id_assignment("22=0.5"), Ok((22, 0.5)));
        assert!(parse_id_assignment("arm=0.5").is_err());
    }

    /// Test: Edit command line
    /// Validates: global flags after the subcommand, repeated assignments
    #[test]
    fn test_args_edit() {
        let args = Args::try_parse_from([
            "motion-edit", "edit", "walk.yaml", "2", "rotate_1=0.33", "rotate_7=-0.11",
            "--strict", "-o", "out.yaml", "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbosity, 2);
        match args.command {
            Command::Edit { name, joints, strict, arm_only, output, .. } => {
                assert_eq!(name, "2");
                assert_eq!(joints.len(), 2);
                assert!(strict);
                assert!(!arm_only);
                assert_eq!(output, Some(PathBuf::from("out.yaml")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    /// Test: Conflicting flags
    /// Validates: --arm-only cannot be combined with --strict
    #[test]
    fn test_args_arm_only_conflicts_with_strict() {
        let result = Args::try_parse_from([
            "motion-edit", "edit", "walk.yaml", "2", "rotate_1=0.3", "--strict", "--arm-only",
        ]);
        assert!(result.is_err());
    }
}
