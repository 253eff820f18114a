use backend::Backend;
use random_mover::RandomMoverPlayer;
use terminal_ui::TerminalUIPlayer;

fn main() {
    let mut backend: Backend<TerminalUIPlayer, RandomMoverPlayer> = Backend::new();
    let outcome = backend.play_game();
    println!("{}", backend.game_state());
    println!("{outcome}");
}
