use clap::{App, Arg, ArgMatches};
use colored::Colorize;
use rubik_engine::*;
use tracing_subscriber::EnvFilter;

fn input_checker(input: &str) -> Result<(), String> {
    parse_moves(input).map(|_| ()).map_err(|err| err.to_string())
}

fn new_app() -> App<'static> {
    App::new("Rubik Engine")
        .about("Applies, scrambles and inspects 3x3x3 cube states")
        .arg(
            Arg::new("MOVES")
                .validator(input_checker)
                .conflicts_with_all(&["rand", "new"])
                .required_unless_present_any(&["rand", "new"])
                .help(
                    "Face rotations splited by whitespaces.\n\
                    U, D, F, B, L, R for Up, Down, Front, Back, Left and Right\n\
                    (append 2 for half turn and ' for counterclockwise)",
                ),
        )
        .arg(
            Arg::new("simplify")
                .long("simplify")
                .short('S')
                .requires("MOVES")
                .help("Merge consecutive turns of the same face before applying"),
        )
        .arg(
            Arg::new("rand")
                .long("rand")
                .short('r')
                .help("<NB> of random moves")
                .require_equals(true)
                .value_name("NB")
                .validator(|arg| arg.parse::<usize>()),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .requires("rand")
                .help("Scramble seed (random when omitted)")
                .require_equals(true)
                .value_name("SEED")
                .validator(|arg| arg.parse::<u32>()),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .short('b')
                .requires("rand")
                .help("Generate <N> scrambles for consecutive seeds")
                .require_equals(true)
                .value_name("N")
                .validator(|arg| arg.parse::<usize>()),
        )
        .arg(
            Arg::new("new")
                .long("new")
                .short('n')
                .conflicts_with("rand")
                .help("Start with an unaltered cube"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log at debug level (RUST_LOG takes precedence)"),
        )
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn disp_movs(movs: &[Move]) -> String {
    movs.iter().map(Move::painted).collect::<Vec<String>>().join(" ")
}

fn report(cube: &Cube) {
    println!("\n{}", cube);
    println!("{}{}", "STAGE: ".bright_green(), cube.stage());
}

fn run_rand(cmd: &ArgMatches) {
    let mov_nb: usize = cmd.value_of_t("rand").unwrap_or_else(|err| err.exit());
    let seed: u32 = if cmd.is_present("seed") {
        cmd.value_of_t("seed").unwrap_or_else(|err| err.exit())
    } else {
        rand::random()
    };

    if cmd.is_present("batch") {
        let count: usize = cmd.value_of_t("batch").unwrap_or_else(|err| err.exit());
        let seeds = (0..count)
            .map(|i| seed.wrapping_add(i as u32))
            .collect::<Vec<u32>>();

        for (seed, scramble) in seeds.iter().zip(scramble::batch(mov_nb, &seeds)) {
            println!(
                "{}{:<10} {}",
                "SEED: ".bright_green(),
                seed,
                disp_movs(&scramble.movs)
            );
        }
    } else {
        tracing::info!(seed, mov_nb, "scrambling");
        let scramble = random_scramble(mov_nb, seed);

        println!("{}{}", "SEED: ".bright_green(), seed);
        println!("{}{}", "MOVES: ".bright_green(), disp_movs(&scramble.movs));
        report(&scramble.cube);
    }
}

fn run(cmd: &ArgMatches) -> CubeResult<()> {
    if cmd.is_present("rand") {
        run_rand(cmd);
    } else if cmd.is_present("new") {
        report(&Cube::new());
    } else {
        let mut movs = parse_moves(cmd.value_of("MOVES").unwrap_or_default())?;

        println!("{}{}", "MOVES: ".bright_green(), disp_movs(&movs));
        if cmd.is_present("simplify") {
            movs = simplify_moves(&movs);
            println!("{}{}", "SIMPLIFIED: ".bright_green(), disp_movs(&movs));
        }
        report(&Cube::new().apply_moves(&movs));
    }
    Ok(())
}

fn main() {
    let cmd = new_app().get_matches();

    init_tracing(cmd.is_present("verbose"));
    if let Err(err) = run(&cmd) {
        eprintln!("{}{}", "error: ".bright_red(), err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_accepts_moves() {
        let cmd = new_app()
            .try_get_matches_from(["rubik", "R U R' U'", "--simplify"])
            .unwrap();

        assert_eq!(cmd.value_of("MOVES"), Some("R U R' U'"));
        assert!(cmd.is_present("simplify"));
    }

    #[test]
    fn test_app_rejects_bad_moves() {
        assert!(new_app().try_get_matches_from(["rubik", "R X"]).is_err());
    }

    #[test]
    fn test_app_scramble_flags() {
        let cmd = new_app()
            .try_get_matches_from(["rubik", "--rand=25", "--seed=1234", "--batch=3"])
            .unwrap();

        assert_eq!(cmd.value_of_t::<usize>("rand").unwrap(), 25);
        assert_eq!(cmd.value_of_t::<u32>("seed").unwrap(), 1234);
        assert!(new_app()
            .try_get_matches_from(["rubik", "--seed=1"])
            .is_err());
        assert!(new_app()
            .try_get_matches_from(["rubik", "--rand=5", "--new"])
            .is_err());
    }
}
