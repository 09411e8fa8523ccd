use clap::Parser;
use lightsout_core::{BoardConfig, Coord};
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rows on the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE.0)]
    rows: Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE.1)]
    cols: Coord,

    /// Chance that any cell starts lit
    #[arg(long, default_value_t = BoardConfig::DEFAULT_START_PROBABILITY)]
    chance: f64,
}

impl Args {
    /// Parses `#--opt=value&...` fragments, falling back to all defaults when clap rejects them.
    fn from_location_hash(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::try_parse_from(hash.split(['#', '&'])) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
    }

    fn board_config(&self) -> BoardConfig {
        BoardConfig::new((self.rows, self.cols), self.chance).unwrap_or_else(|err| {
            log::warn!("{}, falling back to the default board", err);
            BoardConfig::default()
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = Args::from_location_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring options {:?}: {}", location_hash, err.kind());
    }
    log::debug!("args: {:?}", args);

    let props = game::GameProps {
        config: args.board_config(),
        seed: args.seed,
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_fragments_parse_into_board_config() {
        let args = Args::try_parse_from("#--rows=3&--cols=4&--chance=0.5&--seed=9".split(['#', '&']))
            .unwrap();

        assert_eq!(args.seed, Some(9));
        assert_eq!(args.board_config(), BoardConfig::new((3, 4), 0.5).unwrap());
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::try_parse_from("".split(['#', '&'])).unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.board_config(), BoardConfig::default());
    }

    #[test]
    fn unparsable_hash_falls_back_to_defaults() {
        for hash in ["#--rows=300", "#--chance=abc", "#--bogus"] {
            let (args, err) = Args::from_location_hash(hash);

            assert!(err.is_some(), "{hash}");
            assert_eq!(args.seed, None);
            assert_eq!(args.board_config(), BoardConfig::default());
        }
    }

    #[test]
    fn parsed_hash_reports_no_error() {
        let (args, err) = Args::from_location_hash("#--rows=2&--seed=5");

        assert!(err.is_none());
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.board_config().size, (2, 5));
    }

    #[test]
    fn invalid_options_fall_back_to_default_board() {
        let args = Args::try_parse_from(["", "--rows=0", "--chance=2"]).unwrap();

        assert_eq!(args.board_config(), BoardConfig::default());
    }
}
