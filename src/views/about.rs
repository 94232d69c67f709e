//! Static about page.

use url::Url;

pub fn render_about(base_url: &Url) -> String {
    format!(
        "Football Scout {version}\n\
         \n\
         Search, inspect and compare football players from an analytics backend.\n\
         \n\
         Methodology\n\
         - Season and per-competition stats are aggregated by the backend from its listed sources.\n\
         - Market values marked [ESTIMATED] come from a valuation model, not from a\n  \
           reported transfer value. The profile lists the features that drove the estimate.\n\
         - Similar players are ranked by the backend on the player's statistical profile.\n\
         \n\
         Backend: {base_url}",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_about_names_backend() {
        let url = Url::parse("http://scout.example.com/").unwrap();
        let out = render_about(&url);

        assert!(out.starts_with("Football Scout "));
        assert!(out.contains("[ESTIMATED]"));
        assert!(out.ends_with("Backend: http://scout.example.com/"));
    }
}
