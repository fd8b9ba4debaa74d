use colored::Colorize;
use orbitify_core::ClientConfig;

pub fn run(config: &ClientConfig) {
    println!("🚀 Connect with Spotify:");
    println!("  {}", config.login_url().green().underline());
    println!("\n💡 After logging in, pass the page URL you land on to:");
    println!("  orbitify show --callback '<URL>'");
}
