use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::field::ProfileField;

#[derive(Parser, Debug)]
#[command(name = "eduprofile")]
#[command(about = "View and edit the signed-in teacher or student profile", long_about = None)]
pub struct Cli {
    #[arg(long, env = "BASE_CONFIG", default_value = "config/base.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the profile panel.
    Show,
    /// Open the editor, apply the given fields and submit.
    Edit(EditArgs),
    /// Print what the router does with a path for the current role.
    Route { path: String },
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, help = "Gender code: M, F or U")]
    pub gender: Option<String>,

    #[arg(long, help = "Teacher biography")]
    pub introduction: Option<String>,

    #[arg(long, help = "Student class section")]
    pub class_name: Option<String>,

    #[arg(long)]
    pub profession: Option<String>,

    #[arg(long)]
    pub college: Option<String>,

    #[arg(long)]
    pub id_card: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

impl EditArgs {
    /// Fields given on the command line, in form order.
    pub fn changes(self) -> Vec<(ProfileField, String)> {
        [
            (ProfileField::Name, self.name),
            (ProfileField::Gender, self.gender),
            (ProfileField::Introduction, self.introduction),
            (ProfileField::ClassName, self.class_name),
            (ProfileField::Profession, self.profession),
            (ProfileField::College, self.college),
            (ProfileField::IdCard, self.id_card),
            (ProfileField::Password, self.password),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::domain::entities::field::ProfileField;
    use crate::infra::cli::{Cli, Command};

    #[test]
    fn test_parse_edit_changes() {
        let cli = Cli::parse_from([
            "eduprofile",
            "--config",
            "custom.toml",
            "edit",
            "--name",
            "Wei",
            "--class-name",
            "3B",
            "--password",
            "secret12",
        ]);

        assert_eq!(cli.config.to_str(), Some("custom.toml"));
        let Command::Edit(args) = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(
            args.changes(),
            vec![
                (ProfileField::Name, "Wei".to_string()),
                (ProfileField::ClassName, "3B".to_string()),
                (ProfileField::Password, "secret12".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::parse_from(["eduprofile", "--config", "base.toml", "route", "/list?page=2"]);
        assert!(matches!(cli.command, Command::Route { ref path } if path == "/list?page=2"));
    }
}
