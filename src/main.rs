use std::io::{self, BufRead, Write};

use clap::Parser;
use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use slide_search::{
    shuffle, Board, PuzzleConfig, PuzzleError, PuzzleResult, SearchLimits, Strategy,
};

const RULE: &str = "-----------------------------";
const DEFAULT_DIMENSION: usize = 4;
const DEFAULT_SHUFFLES: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "slide-search", about = "Shuffle and solve an N×N sliding tile puzzle")]
struct Args {
    /// Board dimension N
    #[arg(long)]
    dimension: Option<usize>,

    /// Number of random legal moves applied to the solved board
    #[arg(long)]
    shuffles: Option<usize>,

    /// Search strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Seed for the shuffle RNG (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after expanding this many states
    #[arg(long)]
    max_expansions: Option<u64>,
}

struct Console<R, W> {
    input: R,
    out: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn read_line(&mut self) -> PuzzleResult<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    // A blank line takes `default`.
    fn prompt_number(
        &mut self,
        default: usize,
        accept: impl Fn(usize) -> bool,
    ) -> PuzzleResult<Option<usize>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Some(default));
            }
            match trimmed.parse::<usize>() {
                Ok(n) if accept(n) => return Ok(Some(n)),
                _ => writeln!(self.out, "Please enter a whole number")?,
            }
        }
    }

    fn prompt_strategy(&mut self) -> PuzzleResult<Option<Strategy>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(strategy) = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .find_map(Strategy::from_mode_char)
            {
                return Ok(Some(strategy));
            }
        }
    }

    // Blank lines are skipped; Q or end of input quits.
    fn prompt_restart(&mut self) -> PuzzleResult<bool> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim_start().chars().next() {
                None => continue,
                Some(c) => return Ok(!matches!(c, 'q' | 'Q')),
            }
        }
    }

    fn wait_for_enter(&mut self) -> PuzzleResult<()> {
        self.read_line()?;
        Ok(())
    }

    fn banner(&mut self, text: &str) -> PuzzleResult<()> {
        if self.styled {
            writeln!(self.out, "{}", style(text).bold().green())?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn print_board(&mut self, board: &Board) -> PuzzleResult<()> {
        write!(self.out, "{}", board)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn solve_and_show(
        &mut self,
        board: &Board,
        strategy: Strategy,
        limits: &SearchLimits,
        pause: bool,
    ) -> PuzzleResult<()> {
        info!("solving with {} search", strategy.name());
        writeln!(self.out, "Solving...")?;
        writeln!(self.out)?;

        let solution = match strategy.solve(board, limits) {
            Ok(solution) => solution,
            Err(e @ (PuzzleError::BudgetExhausted { .. } | PuzzleError::NotFound { .. })) => {
                writeln!(self.out, "No solution: {}", e)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        self.banner("-----SOLVED-----")?;
        writeln!(
            self.out,
            "Found a {}-move solution after {} expansions",
            solution.len(),
            solution.expansions
        )?;
        if pause {
            writeln!(self.out, "Press Enter to show each step")?;
        }
        writeln!(self.out)?;

        let mut display = board.clone();
        for &tile in &solution.moves {
            if pause {
                self.wait_for_enter()?;
            }
            let dir = display
                .apply_move(tile)?
                .ok_or(PuzzleError::IllegalMove { tile })?;
            writeln!(self.out, "Move {} ({})", tile, dir)?;
            self.print_board(&display)?;
        }

        self.banner("-----DONE WITH SOLUTION-----")
    }

    /// Returns false when input ran out.
    fn run_round(&mut self, rng: &mut SmallRng, limits: &SearchLimits) -> PuzzleResult<bool> {
        writeln!(
            self.out,
            "Enter dimensions for the sliding puzzle (single int value) {} recommended",
            DEFAULT_DIMENSION
        )?;
        let Some(dimension) = self.prompt_number(DEFAULT_DIMENSION, |n| n > 0)? else {
            return Ok(false);
        };

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Puzzle set. Please enter number of times you wish to shuffle the board \
             (single int value, recommended no more than 100)"
        )?;
        let Some(shuffles) = self.prompt_number(DEFAULT_SHUFFLES, |_| true)? else {
            return Ok(false);
        };

        let board = shuffled_board(dimension, shuffles, rng)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out)?;
        self.print_board(&board)?;

        writeln!(self.out)?;
        writeln!(
            self.out,
            "SHUFFLED. Type A for A* search, or B for breadth first search"
        )?;
        let Some(strategy) = self.prompt_strategy()? else {
            return Ok(false);
        };

        self.solve_and_show(&board, strategy, limits, true)?;
        Ok(true)
    }
}

fn shuffled_board(dimension: usize, shuffles: usize, rng: &mut SmallRng) -> PuzzleResult<Board> {
    let mut board = Board::solved(PuzzleConfig::new(dimension)?);
    let applied = shuffle(&mut board, shuffles, rng)?;
    info!("shuffled {}x{} board with {:?}", dimension, dimension, applied);
    Ok(board)
}

fn run(args: Args) -> PuzzleResult<()> {
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let limits = args
        .max_expansions
        .map_or_else(SearchLimits::unbounded, SearchLimits::with_max_expansions);

    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut console = Console {
        input: io::stdin().lock(),
        out: stdout.lock(),
        styled,
    };

    if let (Some(dimension), Some(shuffles), Some(strategy)) =
        (args.dimension, args.shuffles, args.strategy)
    {
        let board = shuffled_board(dimension, shuffles, &mut rng)?;
        console.print_board(&board)?;
        console.solve_and_show(&board, strategy, &limits, false)?;
        console.out.flush()?;
        return Ok(());
    }

    while console.run_round(&mut rng, &limits)? {
        writeln!(console.out)?;
        writeln!(console.out, "Enter Q to quit or anything else to restart")?;
        if !console.prompt_restart()? {
            break;
        }
    }
    console.out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
