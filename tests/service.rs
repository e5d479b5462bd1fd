use std::sync::Arc;
use std::thread;

use cpu_chess::ChessService;
use cpu_chess::command::Response;
use pretty_assertions::assert_eq;


fn send(service: &ChessService, request: &str) -> String {
    service.write(request);
    service.read().map(|response| response.to_string()).unwrap_or_default()
}

// Replays "request => reply" lines. Requests get their trailing newline added here.
fn check_transcript(service: &ChessService, transcript: &str) {
    for line in transcript.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (request, expected) = line.split_once("=>").unwrap();
        let reply = send(service, &format!("{}\n", request.trim()));
        assert_eq!(reply.trim_end(), expected.trim().replace("\\n", "\n"), "request: {request}");
    }
}

#[test]
fn opening_transcript() {
    let service = ChessService::new(Some(11));
    check_transcript(
        &service,
        "
        01 => NOGAME
        02 WPe2-e4 => NOGAME
        03 => NOGAME
        04 => NOGAME
        00 W => OK
        03 => OOT
        02 WPe2-e4 => OK
        02 WPd2-d4 => OOT
        04 => OOT
        03 => OK
        02 WQd1-h5xBQ => ILLMOVE
        02 BPe7-e5 => ILLMOVE
        02 WPe2-e4 => ILLMOVE
        02 nonsense => ILLMOVE
        04 => OK\\nBLACK WINS
        02 WPd2-d4 => NOGAME
        ",
    );
}

#[test]
fn malformed_requests() {
    let service = ChessService::new(Some(11));
    assert_eq!(send(&service, "00 W"), "UNKCMD\n");
    assert_eq!(send(&service, "hello\n"), "UNKCMD\n");
    assert_eq!(send(&service, "00 W please\n"), "INVFMT\n");
    assert_eq!(send(&service, "01 \n"), "INVFMT\n");
    assert_eq!(send(&service, "0123456789012345678901\n"), "UNKCMD\n");
    // None of these started a game.
    assert_eq!(send(&service, "01\n"), "NOGAME\n");
}

#[test]
fn board_display() {
    let service = ChessService::new(Some(11));
    send(&service, "00 W\n");
    send(&service, "02 WPe2-e4\n");
    let text = send(&service, "01\n");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[1], "2 WP WP WP WP ** WP WP WP ");
    assert_eq!(lines[3], "4 ** ** ** ** WP ** ** ** ");
    assert_eq!(lines[8], "  a  b  c  d  e  f  g  h");
}

#[test]
fn black_human_waits_for_white() {
    let service = ChessService::new(Some(5));
    check_transcript(
        &service,
        "
        00 B => OK
        02 BPe7-e5 => OOT
        04 => OOT
        03 => OK
        03 => OOT
        04 => OK\\nWHITE WINS
        ",
    );
}

#[test]
fn concurrent_clients_see_whole_moves() {
    let service = Arc::new(ChessService::new(Some(5)));
    service.write("00 W\n");
    service.write("02 WPe2-e4\n");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                service.write("01\n");
                match service.read() {
                    Some(Response::Display(board)) => board.population(),
                    other => panic!("unexpected reply: {other:?}"),
                }
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 32);
    }
}
