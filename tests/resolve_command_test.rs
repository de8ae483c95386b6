//! End-to-end: command line through the HTTP adapters against a mock API.

use std::io::Write;

use clap::Parser;
use mockito::{Matcher, Server, ServerGuard};
use osc_staging_lib::cli::Cli;
use serde_json::json;
use tempfile::NamedTempFile;

fn config_file(server: &ServerGuard) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "[api]\nurl = \"{}\"\nusername = \"tux\"\npassword = \"penguin\"\ntimeout_secs = 5\n\n[staging]\nproject = \"openSUSE:Factory\"\n",
        server.url()
    )
    .unwrap();
    file
}

fn cli(config: &NamedTempFile, args: &[&str]) -> Cli {
    let path = config.path().to_str().unwrap();
    let mut argv = vec!["osc-staging", "--config", path];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn one_request(id: u64, project: &str, package: &str, state: &str) -> String {
    format!(
        r#"<collection matches="1">
             <request id="{id}">
               <action type="submit">
                 <source project="devel:tools" package="{package}"/>
                 <target project="{project}" package="{package}"/>
               </action>
               <state name="{state}"/>
             </request>
           </collection>"#
    )
}

#[tokio::test]
async fn resolves_package_name_through_the_api() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/request")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("project".into(), "openSUSE:Factory".into()),
            Matcher::UrlEncoded("package".into(), "vim".into()),
            Matcher::UrlEncoded("states".into(), "new,review,declined".into()),
        ]))
        .with_status(200)
        .with_body(one_request(501, "openSUSE:Factory", "vim", "review"))
        .create_async()
        .await;
    let config = config_file(&server);

    let found = osc_staging_lib::run(cli(&config, &["resolve", "vim"]))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        json!({ "501": { "project": "openSUSE:Factory", "state": "review" } })
    );
}

#[tokio::test]
async fn resolves_request_number_targeting_a_staging_area() {
    let mut server = Server::new_async().await;
    let _by_package = server
        .mock("GET", "/request")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"<collection matches="0"/>"#)
        .create_async()
        .await;
    let _by_id = server
        .mock("GET", "/request/502")
        .with_status(200)
        .with_body(
            r#"<request id="502">
                 <action type="submit">
                   <target project="openSUSE:Factory:Staging:B" package="emacs"/>
                 </action>
                 <state name="new"/>
               </request>"#,
        )
        .create_async()
        .await;
    let config = config_file(&server);

    let found = osc_staging_lib::run(cli(&config, &["resolve", "502"]))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        json!({ "502": { "project": "openSUSE:Factory:Staging:B" } })
    );
}

#[tokio::test]
async fn request_for_another_project_is_rejected() {
    let mut server = Server::new_async().await;
    let _by_package = server
        .mock("GET", "/request")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"<collection matches="0"/>"#)
        .create_async()
        .await;
    let _by_id = server
        .mock("GET", "/request/503")
        .with_status(200)
        .with_body(
            r#"<request id="503">
                 <action type="submit"><target project="openSUSE:Leap:15.6" package="gcc"/></action>
                 <state name="new"/>
               </request>"#,
        )
        .create_async()
        .await;
    let config = config_file(&server);

    let err = osc_staging_lib::run(cli(&config, &["resolve", "503"]))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Request 503 is not for openSUSE:Factory, but for openSUSE:Leap:15.6"
    );
}

#[tokio::test]
async fn staged_flag_searches_staging_areas_only() {
    let mut server = Server::new_async().await;
    let _areas = server
        .mock("GET", "/search/project/id")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"<collection><project name="openSUSE:Factory:Staging:A"/></collection>"#)
        .create_async()
        .await;
    let _staged = server
        .mock("GET", "/search/request")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(one_request(600, "openSUSE:Factory", "Vim", "review"))
        .create_async()
        .await;
    let never = server
        .mock("GET", "/request")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let config = config_file(&server);

    let found = osc_staging_lib::run(cli(&config, &["resolve", "--staged", "vim"]))
        .await
        .unwrap();

    never.assert_async().await;
    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        json!({ "600": { "staging": "openSUSE:Factory:Staging:A" } })
    );
}

#[tokio::test]
async fn unauthorized_api_aborts_with_the_token() {
    let mut server = Server::new_async().await;
    let _denied = server
        .mock("GET", "/request")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;
    let config = config_file(&server);

    let err = osc_staging_lib::run(cli(&config, &["resolve", "vim"]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("\"vim\""), "{}", err);
}
