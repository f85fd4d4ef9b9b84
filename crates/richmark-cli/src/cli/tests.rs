#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_to_html_with_overrides() {
        let cli = Cli::try_parse_from([
            "richmark",
            "to-html",
            "notes.md",
            "-o",
            "notes.html",
            "--max-heading-level",
            "5",
            "--new-tab",
            "--allow-scheme",
            "https",
            "--allow-scheme",
            "tel",
        ])
        .unwrap();

        let Command::ToHtml(args) = cli.command else {
            panic!("expected to-html");
        };
        assert_eq!(args.input, Some(PathBuf::from("notes.md")));
        assert_eq!(args.output, Some(PathBuf::from("notes.html")));
        assert_eq!(args.max_heading_level, Some(5));
        assert!(args.new_tab);
        assert_eq!(args.allow_schemes, vec!["https", "tel"]);
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::try_parse_from(["richmark", "to-markdown"]).unwrap();
        let Command::ToMarkdown(args) = cli.command else {
            panic!("expected to-markdown");
        };
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(!args.new_tab);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "richmark",
            "block-display",
            "h2",
            "--verbose",
            "--no-color",
            "--config",
            "site.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["richmark", "-v", "-q", "to-html"]).is_err());
    }

    #[test]
    fn test_sanitize_href_requires_href() {
        assert!(Cli::try_parse_from(["richmark", "sanitize-href"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
