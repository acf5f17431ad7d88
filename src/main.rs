use git_credential_op::{cli, logging};

fn main() {
    logging::init_logging();
    // Errors go to stderr; the exit status stays 0.
    if let Err(e) = cli::run() {
        eprintln!("git-credential-op: {e:#}");
    }
}
