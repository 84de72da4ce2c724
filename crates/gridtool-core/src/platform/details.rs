use sysinfo::System;

/// Host details written to the event log at startup
#[derive(Default, Debug)]
pub struct Details {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    pub host_name: Option<String>,
    pub total_memory_mb: u64,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_os(&mut self) {
        self.os_name = System::name();
        self.os_version = System::os_version();
        self.kernel_version = System::kernel_version();
        self.host_name = System::host_name();

        let mut system = System::new();
        system.refresh_memory();
        self.total_memory_mb = system.total_memory() / (1024 * 1024);
    }

    pub fn format_os(&self) -> String {
        let unknown = || "unknown".to_string();
        format!(
            "SYSTEM\nOS               : {} {}\nKernel           : {}\nHost             : {}\nArchitecture     : {}\nMemory           : {} MB",
            self.os_name.clone().unwrap_or_else(unknown),
            self.os_version.clone().unwrap_or_default(),
            self.kernel_version.clone().unwrap_or_else(unknown),
            self.host_name.clone().unwrap_or_else(unknown),
            std::env::consts::ARCH,
            self.total_memory_mb,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_falls_back_to_unknown() {
        let details = Details::new();
        let text = details.format_os();
        assert!(text.starts_with("SYSTEM"));
        assert!(text.contains("Kernel           : unknown"));
        assert!(text.contains(std::env::consts::ARCH));
    }
}
