use minimax_solver::stonehenge::{Board, Cell, Stonehenge, StonehengeOptions};
use minimax_solver::util::{battle_royale, next_move};
use minimax_solver::{
    evaluate_tree, iterative_evaluation, recursive_evaluation, Error, Game, GameTree,
    IterativeMinimax, Player, Random, RecursiveMinimax, RoughOutcome, State, Strategy, LOSE, WIN,
};

fn game(side_length: usize) -> Stonehenge {
    Stonehenge::new(StonehengeOptions::new().with_side_length(side_length)).unwrap()
}

fn labels(moves: &[Cell]) -> String {
    moves.iter().map(|m| m.label()).collect()
}

#[test]
fn side_one_first_move_wins() {
    let game = game(1);
    let initial = game.current_state().clone();
    assert_eq!(labels(&initial.legal_moves()), "ABC");

    let a = game.parse_move("A").unwrap();
    let after = initial.apply(a);
    assert!(after.legal_moves().is_empty());
    assert!(game.is_over(&after));
    assert!(game.is_winner(&after, Player::One));
    // apply is pure
    assert_eq!(labels(&initial.legal_moves()), "ABC");
    assert_eq!(&initial, game.current_state());

    assert_eq!(recursive_evaluation(&game, &initial), WIN);
    assert_eq!(iterative_evaluation(&game, &initial), WIN);
    // The opponent, to move in the finished position, has lost.
    assert_eq!(recursive_evaluation(&game, &after), LOSE);
    assert_eq!(iterative_evaluation(&game, &after), LOSE);

    let legal = initial.legal_moves();
    let chosen =
        vec![RecursiveMinimax::new().choose_move(&game), IterativeMinimax::new().choose_move(&game)];
    for m in chosen {
        assert!(legal.contains(&m.expect("a move in a live position")));
    }
}

#[test]
fn evaluators_agree_on_every_node_of_side_two() {
    let game = game(2);
    let root = evaluate_tree(&game, GameTree::new(game.current_state().clone()));
    let mut nodes = 0;
    root.for_each(|node| {
        nodes += 1;
        assert_eq!(node.score, Some(recursive_evaluation(&game, &node.state)));
    });
    assert_eq!(nodes, root.node_count());
    assert!(nodes > 1);
}

#[test]
fn evaluation_does_not_touch_the_game() {
    let mut game = game(2);
    let before = game.current_state().clone();
    let mid = before.apply(game.parse_move("d").unwrap());
    let _ = recursive_evaluation(&game, &mid);
    let _ = iterative_evaluation(&game, &mid);
    assert_eq!(game.current_state(), &before);

    game.set_current_state(mid.clone());
    let _ = IterativeMinimax::new().choose_move(&game);
    let _ = RecursiveMinimax::new().choose_move(&game);
    assert_eq!(game.current_state(), &mid);
}

#[test]
fn minimax_never_loses_to_random() {
    for seed in 0..3 {
        let mut g = game(2);
        let value = recursive_evaluation(&g, g.current_state());
        let result = battle_royale(&mut g, &mut IterativeMinimax::new(), &mut Random::with_seed(seed));
        match value {
            WIN => assert_eq!(result, Ok(Some(0)), "seed {}", seed),
            _ => assert_ne!(result, Ok(Some(1)), "seed {}", seed),
        }
    }
}

#[test]
fn minimax_match_agrees_with_root_value() {
    let mut g = game(2);
    let value = iterative_evaluation(&g, g.current_state());
    let result = battle_royale(&mut g, &mut RecursiveMinimax::new(), &mut IterativeMinimax::new());
    let expected = match value {
        WIN => Some(0),
        LOSE => Some(1),
        _ => None,
    };
    assert_eq!(result, Ok(expected));
}

#[test]
fn second_player_can_start() {
    let g = Stonehenge::new(StonehengeOptions::new().with_first_player(Player::Two)).unwrap();
    assert_eq!(g.current_state().mover(), Player::Two);
    let after = g.current_state().apply(g.parse_move("c").unwrap());
    assert!(g.is_winner(&after, Player::Two));
    assert_eq!(iterative_evaluation(&g, &after), LOSE);
}

#[test]
fn finished_game_is_an_error_for_drivers() {
    let mut g = game(1);
    let after = g.current_state().apply(g.parse_move("B").unwrap());
    g.set_current_state(after);
    assert_eq!(next_move(&g, &mut RoughOutcome::new()), Err(Error::GameOver));
    assert_eq!(g.parse_move("A"), Err(Error::InvalidMove("A".to_string())));
}

#[test]
fn rough_outcome_finds_the_finishing_cell() {
    let mut board = Board::new(2, Player::One).unwrap();
    for &label in ['A', 'B', 'D', 'F'].iter() {
        board = board.apply(Cell::from_label(label).unwrap());
    }
    // Only E ends the game here, and it is not the first legal cell.
    assert_eq!(labels(&board.legal_moves()), "CEG");
    let finishing =
        board.legal_moves().into_iter().filter(|&m| board.apply(m).is_over()).collect::<Vec<_>>();
    assert_eq!(labels(&finishing), "E");

    let mut g = game(2);
    g.set_current_state(board.clone());
    let m = RoughOutcome::new().choose_move(&g);
    assert_eq!(m, Cell::from_label('E'));
    assert!(g.is_winner(&board.apply(m.unwrap()), Player::One));
}

struct Resigns;

impl Strategy<Stonehenge> for Resigns {
    fn choose_move(&mut self, _: &Stonehenge) -> Option<Cell> {
        None
    }
}

#[test]
fn giving_up_on_a_live_game_is_an_error_for_drivers() {
    let mut g = game(2);
    assert_eq!(next_move(&g, &mut Resigns), Err(Error::NoMove));
    assert_eq!(battle_royale(&mut g, &mut Resigns, &mut RoughOutcome::new()), Err(Error::NoMove));
    assert_eq!(g.current_state(), &Board::new(2, Player::One).unwrap());
}
