//! Built-in tool definitions.
//!
//! This is configuration, not logic: flat lists and maps describing every
//! installable unit the dispatcher knows about. Units are immutable static
//! data; nothing here is mutated at runtime.

/// A tool cloned into the opt root and finished with ordered shell commands.
#[derive(Debug)]
pub struct ClonedTool {
    /// Directory name under the opt root, unique within the category.
    pub name: &'static str,
    /// Git repository URL.
    pub url: &'static str,
    /// Shell lines run in declared order after a successful clone.
    /// The unit's sequence halts on the first failing line.
    pub post_install: &'static [&'static str],
    /// Only installable on Kali (e.g. depends on Kali repos).
    pub kali_only: bool,
}

/// A tool installed from source via `go install`.
#[derive(Debug)]
pub struct GoTool {
    /// Binary name, used for the presence probe.
    pub name: &'static str,
    /// Go module reference passed to `go install`.
    pub module: &'static str,
}

/// A containerized tool pulled as an image, optionally aliased in the shell.
#[derive(Debug)]
pub struct DockerTool {
    /// Tool name, used for the presence probe and the alias duplicate guard.
    pub name: &'static str,
    /// Image reference passed to `docker pull`.
    pub image: &'static str,
    /// Alias line appended to shell startup files, if any.
    pub alias: Option<&'static str>,
}

/// Where a flat download lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadDest {
    /// `~/scripts/payloads`
    Scripts,
    /// `~/wordlists`
    Wordlists,
}

/// A flat (filename, URL) download.
#[derive(Debug)]
pub struct Download {
    pub filename: &'static str,
    pub url: &'static str,
    pub dest: DownloadDest,
}

/// APT packages available on Kali.
pub const APT_TOOLS_KALI: &[&str] = &[
    "nmap",
    "masscan",
    "naabu",
    "nuclei",
    "burpsuite",
    "feroxbuster",
    "nikto",
    "gobuster",
    "seclists",
    "sqlmap",
    "git",
    "docker.io",
    "docker-compose",
    "golang-go",
    "wireshark",
];

/// APT packages available on stock Debian/Ubuntu repos.
pub const APT_TOOLS_DEBIAN: &[&str] = &[
    "nmap",
    "masscan",
    "nikto",
    "sqlmap",
    "git",
    "docker.io",
    "docker-compose",
    "golang-go",
    "wireshark",
    "burpsuite",
];

/// Conservative list for unrecognized distributions.
pub const APT_TOOLS_MINIMAL: &[&str] = &["nmap", "nikto", "sqlmap", "git", "docker.io"];

/// Tools cloned under the opt root.
pub const CLONED_TOOLS: &[ClonedTool] = &[
    ClonedTool {
        name: "pimpmykali",
        url: "https://github.com/Dewalt-arch/pimpmykali",
        post_install: &[
            "cd /opt/pimpmykali && sudo ./pimpmykali.sh --go",
            "cd /opt/pimpmykali && sudo ./pimpmykali.sh --impacket",
            "cd /opt/pimpmykali && sudo ./pimpmykali.sh --upgrade",
        ],
        kali_only: true,
    },
    ClonedTool {
        name: "xnLinkFinder",
        url: "https://github.com/xnl-h4ck3r/xnLinkFinder.git",
        post_install: &["cd /opt/xnLinkFinder && sudo python setup.py install"],
        kali_only: false,
    },
    ClonedTool {
        name: "knock",
        url: "https://github.com/guelfoweb/knock.git",
        post_install: &["cd /opt/knock && pip3 install -r requirements.txt"],
        kali_only: false,
    },
    ClonedTool {
        name: "Sublist3r",
        url: "https://github.com/aboul3la/Sublist3r.git",
        post_install: &["cd /opt/Sublist3r && pip install -r requirements.txt"],
        kali_only: false,
    },
    ClonedTool {
        name: "Striker",
        url: "https://github.com/s0md3v/Striker.git",
        post_install: &["cd /opt/Striker && pip install -r requirements.txt"],
        kali_only: false,
    },
    ClonedTool {
        name: "wafw00f",
        url: "https://github.com/EnableSecurity/wafw00f.git",
        post_install: &[
            "cd /opt/wafw00f && pip3 install -r requirements.txt",
            "cd /opt/wafw00f && sudo python setup.py install",
        ],
        kali_only: false,
    },
    ClonedTool {
        name: "waymore",
        url: "https://github.com/xnl-h4ck3r/waymore.git",
        post_install: &[
            "cd /opt/waymore && pip3 install -r requirements.txt",
            "cd /opt/waymore && sudo python setup.py install",
        ],
        kali_only: false,
    },
    ClonedTool {
        name: "XSStrike",
        url: "https://github.com/s0md3v/XSStrike.git",
        post_install: &["cd /opt/XSStrike && pip3 install -r requirements.txt"],
        kali_only: false,
    },
];

/// Packages installed via pip3.
pub const PYTHON_TOOLS: &[&str] = &["wfuzz", "arjun", "scrapy", "tld", "requests", "fuzzywuzzy"];

/// Tools installed via `go install`.
pub const GO_TOOLS: &[GoTool] = &[
    GoTool {
        name: "naabu",
        module: "github.com/projectdiscovery/naabu/v2/cmd/naabu@latest",
    },
    GoTool {
        name: "nuclei",
        module: "github.com/projectdiscovery/nuclei/v2/cmd/nuclei@latest",
    },
    GoTool {
        name: "katana",
        module: "github.com/projectdiscovery/katana/cmd/katana@latest",
    },
    GoTool {
        name: "httpx",
        module: "github.com/projectdiscovery/httpx/cmd/httpx@latest",
    },
    GoTool {
        name: "subfinder",
        module: "github.com/projectdiscovery/subfinder/v2/cmd/subfinder@latest",
    },
    GoTool {
        name: "amass",
        module: "github.com/OWASP/Amass/v3/...@master",
    },
    GoTool {
        name: "assetfinder",
        module: "github.com/tomnomnom/assetfinder@latest",
    },
    GoTool {
        name: "httprobe",
        module: "github.com/tomnomnom/httprobe@latest",
    },
    GoTool {
        name: "gowitness",
        module: "github.com/sensepost/gowitness@latest",
    },
    GoTool {
        name: "subjack",
        module: "github.com/haccer/subjack@latest",
    },
    GoTool {
        name: "hakrawler",
        module: "github.com/hakluke/hakrawler@latest",
    },
    GoTool {
        name: "webanalyze",
        module: "github.com/rverton/webanalyze/cmd/webanalyze@latest",
    },
];

/// Containerized tools.
pub const DOCKER_TOOLS: &[DockerTool] = &[DockerTool {
    name: "rustscan",
    image: "rustscan/rustscan:2.0.1",
    alias: Some("alias rustscan='docker run -it --rm --name rustscan rustscan/rustscan:2.0.1'"),
}];

/// Flat downloads: enumeration scripts and wordlists.
pub const DOWNLOADS: &[Download] = &[
    Download {
        filename: "linpeas.sh",
        url: "https://github.com/carlospolop/PEASS-ng/releases/latest/download/linpeas.sh",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "jaws-enum.ps1",
        url: "https://github.com/411Hall/JAWS/raw/master/jaws-enum.ps1",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "LinEnum.sh",
        url: "https://github.com/rebootuser/LinEnum/raw/master/LinEnum.sh",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "winPEASany_ofs.exe",
        url: "https://github.com/carlospolop/PEASS-ng/releases/download/20230122/winPEASany_ofs.exe",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "php-reverse-shell.php",
        url: "https://raw.githubusercontent.com/pentestmonkey/php-reverse-shell/master/php-reverse-shell.php",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "linux-exploit-suggester.sh",
        url: "https://raw.githubusercontent.com/mzet-/linux-exploit-suggester/master/linux-exploit-suggester.sh",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "PowerView.ps1",
        url: "https://github.com/PowerShellMafia/PowerSploit/raw/master/Recon/PowerView.ps1",
        dest: DownloadDest::Scripts,
    },
    Download {
        filename: "rockyou.txt",
        url: "https://github.com/brannondorsey/naive-hashcat/releases/download/data/rockyou.txt",
        dest: DownloadDest::Wordlists,
    },
    Download {
        filename: "common.txt",
        url: "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/Web-Content/common.txt",
        dest: DownloadDest::Wordlists,
    },
    Download {
        filename: "subdomains-top1million-5000.txt",
        url: "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Discovery/DNS/subdomains-top1million-5000.txt",
        dest: DownloadDest::Wordlists,
    },
];
