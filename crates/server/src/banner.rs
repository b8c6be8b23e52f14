pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
  ██████╗ ███████╗███╗   ██╗██████╗ ███████╗
 ██╔════╝ ██╔════╝████╗  ██║██╔══██╗██╔════╝
 ██║  ███╗█████╗  ██╔██╗ ██║██████╔╝█████╗      genrefeed
 ██║   ██║██╔══╝  ██║╚██╗██║██╔══██╗██╔══╝      v{}
 ╚██████╔╝███████╗██║ ╚████║██║  ██║███████╗
  ╚═════╝ ╚══════╝╚═╝  ╚═══╝╚═╝  ╚═╝╚══════╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
