use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "apod-wallpaper")]
#[command(about = "Download APOD and set as desktop background")]
#[command(version)]
pub struct Args {
    /// Only save the downloaded image in current directory
    #[arg(short, long)]
    pub save_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_setting_background() {
        let args = Args::try_parse_from(["apod-wallpaper"]).unwrap();
        assert!(!args.save_only);
    }

    #[test]
    fn test_save_only_flags() {
        for flag in ["--save-only", "-s"] {
            let args = Args::try_parse_from(["apod-wallpaper", flag]).unwrap();
            assert!(args.save_only, "{} should enable save only", flag);
        }
    }

    #[test]
    fn test_rejects_unknown_arguments() {
        assert!(Args::try_parse_from(["apod-wallpaper", "--folder", "x"]).is_err());
    }
}
