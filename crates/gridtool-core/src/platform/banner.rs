use crate::platform::parameters::gui;

#[derive(Default, Debug)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn new() -> Banner {
        Banner {
            message: String::new(),
        }
    }

    pub fn format(&mut self) {
        self.message = format!("\n**** Welcome to {}, Version {}", gui::APPLICATION_NAME, gui::VERSION);
        self.message += &format!("\n**** Today is {}", chrono::Utc::now().format("%m-%d-%Y %H:%M:%S"));

        // Add dependencies information
        self.message += "\n\nDEPENDENCIES";
        self.message += &format!("\nGrid Tool        : {}", gui::VERSION);
        self.message += &format!("\nimage            : {}", env!("IMAGE_CRATE_VERSION"));
        self.message += &format!("\negui             : {}\n", env!("EGUI_CRATE_VERSION"));
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_banner() {
        let mut banner = super::Banner::new();
        assert!(banner.message.is_empty());

        banner.format();
        assert!(banner.message.contains("Welcome to Grid Tool"));
        assert!(banner.message.contains("DEPENDENCIES"));
        assert!(banner.message.contains(super::gui::VERSION));
    }
}
