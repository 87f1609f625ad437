use git_publish::App;
use git_publish::Config;

fn main() -> miette::Result<()> {
    let config = Config::new()?;
    App::new(config).run()
}
