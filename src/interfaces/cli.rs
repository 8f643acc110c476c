use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "odl")]
#[command(about = "Ask a local translation endpoint for a translation, or run one.")]
#[command(version)]
pub struct Cli {
    /// Source language (skips the "Translate from" prompt)
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Target language (skips the "Translate to" prompt)
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// Translation endpoint, e.g. http://localhost:5000
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Print the raw JSON body
    #[arg(long)]
    pub json: bool,

    /// Run the translation endpoint instead of querying it
    #[arg(long)]
    pub serve: bool,

    /// Port for --serve
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Text to translate (skips the "Your text" prompt)
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

impl Cli {
    pub fn text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}
