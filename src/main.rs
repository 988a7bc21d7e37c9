use anyhow::{bail, Context};
use clap::Parser;
use rubiks_cube::{Cube, Face, Movement, Turn};

/// Prints a solved cube and runs some sanity checks on the move tables.
#[derive(Parser)]
struct Options {
    /// Print the cube after every move of the demo sequence.
    #[arg(long)]
    steps: bool,
    /// Print the scrambled cube as JSON as well.
    #[arg(long)]
    json: bool,
    /// Don't print the solved cube.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = Options::parse();

    let cube = Cube::solved();
    if !options.quiet {
        println!("{cube}\n");
    }

    check_turns(&cube)?;

    let mut scrambled = cube;
    for (i, &movement) in Movement::ALL.iter().enumerate() {
        scrambled = scrambled.make_move(movement);
        if options.steps {
            println!("#{} {movement}:\n{scrambled}\n", i + 1);
        }
    }
    scrambled
        .check()
        .context("scrambling produced an invalid cube")?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&scrambled)?);
    }
    if scrambled.reverse_moves(&Movement::ALL) != cube {
        bail!(
            "reversing all {} movements didn't give back the original cube",
            Movement::ALL.len()
        );
    }

    println!("All checks passed.");
    Ok(())
}

/// Checks that every face's turns undo each other, both called directly and
/// through `Movement`s.
fn check_turns(cube: &Cube) -> anyhow::Result<()> {
    for face in Face::ALL {
        let direct = |turn: Turn| match face {
            Face::Front => cube.make_front(turn),
            Face::Back => cube.make_back(turn),
            Face::Up => cube.make_up(turn),
            Face::Down => cube.make_down(turn),
            Face::Left => cube.make_left(turn),
            Face::Right => cube.make_right(turn),
        };
        if direct(Turn::Counterclockwise).make_move(Movement::new(face, Turn::Clockwise)) != *cube {
            bail!("{face} counterclockwise then clockwise didn't cancel out");
        }
        if direct(Turn::Double).make_move(Movement::new(face, Turn::Double)) != *cube {
            bail!("{face} double twice didn't cancel out");
        }

        let clockwise = Movement::new(face, Turn::Clockwise);
        if cube.make_move(clockwise).make_move(clockwise.reversed()) != *cube {
            bail!("{clockwise} then {} didn't cancel out", clockwise.reversed());
        }
        let double = Movement::new(face, Turn::Double);
        if cube.make_move(double).make_move(double) != *cube {
            bail!("{double} twice didn't cancel out");
        }
    }
    Ok(())
}
