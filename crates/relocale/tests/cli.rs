//! End-to-end tests running the `relocale` binary over a throwaway site.

use relocale_test_utils::dir_manifest;
use relocale_test_utils::sandbox::Sandbox;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Staten Island Ductless Mini Splits | HVAC Experts</title>
<meta name="description" content="Ductless mini splits across Staten Island, NY.">
</head>
<body>
<nav>
    <div class="dropdown-content">
        <a href="st-george.html">St. George</a>
        <a href="stapleton.html">Stapleton</a>
        <a href="port-richmond.html">Port Richmond</a>
        <a href="tottenville.html">Tottenville</a>
        <a href="great-kills.html">Great Kills</a>
        <a href="new-dorp.html">New Dorp</a>
        <a href="west-brighton.html">West Brighton</a>
        <a href="castleton-corners.html">Castleton Corners</a>
    </div>
</nav>
<h1>Staten Island's #1 <span class="hero-highlight">Ductless</span> Experts</h1>
<h4>North Shore:</h4>
<ul>
    <li>Stapleton (10305)</li>
    <li><a href="bayonne-nj.html">Bayonne</a></li>
</ul>
<footer>123 Victory Blvd, Staten Island, NY 10301</footer>
</body>
</html>
"#;

const HVAC_REPAIR_HTML: &str = r#"<html>
<head>
<title>HVAC Repair Staten Island | SI Ductless Pro</title>
<meta name="description" content="Fast HVAC repair in Staten Island, NY.">
<meta name="keywords" content="hvac repair staten island">
</head>
<body>
<p>Call SI Ductless Pro in New York today.</p>
</body>
</html>
"#;

const ST_GEORGE_HTML: &str = r#"<html>
<head>
<title>St. George HVAC | Staten Island</title>
<meta name="description" content="HVAC services in St. George, Staten Island.">
</head>
<body>
<div class="emergency-banner">🚨 24/7 Emergency HVAC Services Available in St. George - Call Now!</div>
<h1>Professional <span class="hero-highlight">HVAC Services</span> in St. George</h1>
<p>Expert ductless mini split installation, HVAC repair, and air conditioning services for St. George families. Local technicians with 24/7 emergency service.</p>
<h4>Mid-Island:</h4>
<p>Serving the New York Harbor waterfront.</p>
</body>
</html>
"#;

fn site() -> Sandbox {
    let mut sb = Sandbox::new();
    sb.write("index.html", INDEX_HTML)
        .write("services/hvac-repair.html", HVAC_REPAIR_HTML)
        .write("locations/st-george.html", ST_GEORGE_HTML)
        .write("css/site.css", "body { color: #333; }\n");
    sb
}

#[test]
fn test_all_passes() {
    let sb = site();

    let stdout = sb.run("relocale", ["all", "."]).unwrap();
    assert!(stdout.contains("Found 3 HTML files in ."), "{stdout}");
    assert!(stdout.contains("index.html (updated)"), "{stdout}");
    assert!(stdout.contains("locations/st-george.html (updated)"), "{stdout}");
    assert!(stdout.contains("services/hvac-repair.html (updated)"), "{stdout}");
    assert!(stdout.contains("Updated 3 of 3 files."), "{stdout}");

    insta::assert_snapshot!("all_passes", dir_manifest(sb.root_path()));
}

#[test]
fn test_all_passes_are_idempotent() {
    let sb = site();

    sb.run("relocale", ["all", "."]).unwrap();
    let once = dir_manifest(sb.root_path());

    let stdout = sb.run("relocale", ["all", "."]).unwrap();
    assert!(stdout.contains("· index.html (unchanged)"), "{stdout}");
    assert!(stdout.contains("Updated 0 of 3 files."), "{stdout}");
    assert_eq!(dir_manifest(sb.root_path()), once);
}

#[test]
fn test_service_page_metadata() {
    let mut sb = Sandbox::new();
    sb.write(
        "services/hvac-repair.html",
        "<head>\n<title>Old Title</title>\n<meta name=\"description\" content=\"old desc\">\n</head>\n",
    );

    sb.run("relocale", ["finalize", "."]).unwrap();
    let once = sb.read("services/hvac-repair.html");
    assert_eq!(
        once,
        "<head>\n\
         <title>HVAC Repair Services Belpre OH | 24/7 Emergency Heating & Cooling Repair</title>\n\
         <meta name=\"description\" content=\"Expert HVAC repair services in Belpre, Ohio. 24/7 emergency heating and cooling repair. Licensed technicians. Same-day service.\">\n\
         </head>\n"
    );

    let stdout = sb.run("relocale", ["finalize", "."]).unwrap();
    assert!(stdout.contains("Updated 0 of 1 files."), "{stdout}");
    assert_eq!(sb.read("services/hvac-repair.html"), once);
}

#[test]
fn test_location_lead_with_abbreviated_city() {
    let mut sb = Sandbox::new();
    sb.write(
        "locations/stapleton.html",
        "<p>Expert ductless mini split installation, HVAC repair, and air conditioning services for St. George homeowners. Local technicians with 24/7 emergency service.</p>\n",
    );

    sb.run("relocale", ["finalize", "."]).unwrap();
    assert_eq!(
        sb.read("locations/stapleton.html"),
        "<p>Expert ductless mini split installation, HVAC repair, and air conditioning services for Marietta residents. Local technicians with 24/7 emergency service.</p>\n"
    );
}

#[test]
fn test_each_command_runs_its_own_passes() {
    let mut sb = Sandbox::new();
    sb.write("index.html", "<h4>East Shore:</h4> SI Ductless Pro, NY\n");

    sb.run("relocale", ["navigation", "."]).unwrap();
    assert_eq!(
        sb.read("index.html"),
        "<h4>West Virginia Border:</h4> SI Ductless Pro, NY\n"
    );

    sb.run("relocale", ["content", "."]).unwrap();
    assert_eq!(
        sb.read("index.html"),
        "<h4>West Virginia Border:</h4> Belpre Ductless Pro, NY\n"
    );

    sb.run("relocale", ["finalize", "."]).unwrap();
    assert_eq!(
        sb.read("index.html"),
        "<h4>West Virginia Border:</h4> Belpre Ductless Pro, OH\n"
    );
}

#[test]
fn test_check_reports_without_writing() {
    let mut sb = Sandbox::new();
    sb.write("index.html", "<p>Staten Island</p>\n")
        .write("about.html", "<p>Belpre</p>\n");

    let output = sb.output("relocale", ["finalize", "--check", "."]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.contains("index.html (would update)"), "{stdout}");
    assert!(stdout.contains("1 of 2 files would change."), "{stdout}");
    assert!(stderr.contains("1 file(s) need rewriting"), "{stderr}");
    assert_eq!(sb.read("index.html"), "<p>Staten Island</p>\n");
}

#[test]
fn test_diff_prints_changes() {
    let mut sb = Sandbox::new();
    sb.write("index.html", "<nav>\n<h4>South Shore:</h4>\n</nav>\n");

    let stdout = sb.run("relocale", ["navigation", "--diff", "."]).unwrap();
    assert!(stdout.contains("--- old/index.html"), "{stdout}");
    assert!(stdout.contains("-<h4>South Shore:</h4>"), "{stdout}");
    assert!(stdout.contains("+<h4>Southern Ohio:</h4>"), "{stdout}");
    assert_eq!(sb.read("index.html"), "<nav>\n<h4>South Shore:</h4>\n</nav>\n");
}

#[test]
fn test_unreadable_page_does_not_stop_batch() {
    let mut sb = Sandbox::new();
    sb.write("broken.html", [0xff, 0xfe, b'N', b'Y'])
        .write("good.html", "Staten Island\n");

    let output = sb.output("relocale", ["finalize", "."]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.contains("broken.html: failed to read"), "{stdout}");
    assert!(stdout.contains("good.html (updated)"), "{stdout}");
    assert!(stdout.contains("Updated 1 of 2 files."), "{stdout}");
    assert!(stderr.contains("1 file(s) failed to rewrite"), "{stderr}");
    assert_eq!(sb.read("good.html"), "Belpre\n");
}

#[test]
fn test_missing_root_aborts() {
    let sb = Sandbox::new();

    let output = sb.output("relocale", ["all", "no-such-site"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Site root no-such-site is not a directory"),
        "{stderr}"
    );
}

#[test]
fn test_locale_from_config() {
    let mut sb = Sandbox::new();
    sb.write(
        "relocale.toml",
        "[locale]\ncity = \"Charleston\"\nstate = \"WV\"\nstate_name = \"West Virginia\"\n",
    )
    .write("index.html", "Staten Island, NY\n")
    .write("drafts/vendor/old.html", "Staten Island\n");

    sb.run("relocale", ["finalize", "."]).unwrap();
    assert_eq!(sb.read("index.html"), "Charleston, WV\n");
    assert_eq!(sb.read("drafts/vendor/old.html"), "Staten Island\n");
}
