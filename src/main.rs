use std::io;
use std::process;

use inotify_probe::probe;

fn main() {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = probe::run(&mut stdout.lock(), &mut stderr.lock());
    process::exit(code);
}
