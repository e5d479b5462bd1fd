use console::Style;

use cpu_chess::board::Board;
use cpu_chess::command::Response;
use cpu_chess::display::render_board;
use cpu_chess::force::Force;


fn force_style(force: Force) -> Style {
    match force {
        Force::White => Style::new().red().bold(),
        Force::Black => Style::new().blue(),
    }
}

pub fn render_grid(board: &Board, colored: bool) -> String {
    render_board(board, |force, code| match force {
        Some(force) if colored => force_style(force).apply_to(code).to_string(),
        _ => code.to_owned(),
    })
}

pub fn render_response(response: &Response, colored: bool) -> String {
    match response {
        Response::Display(board) => render_grid(board, colored),
        _ => response.to_string(),
    }
}
