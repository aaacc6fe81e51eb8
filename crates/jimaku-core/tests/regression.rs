use std::cmp::Ordering;
use std::path::PathBuf;

use jimaku_core::{
    EpisodeRange, Resolution, SubtitleKind, SubtitleLanguage, TitleParser, check, load_file, parse,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn assert_ordered(range: &EpisodeRange, title: &str) {
    match range {
        EpisodeRange::Numeric { low, high } => {
            assert_ne!(low.compare(high), Some(Ordering::Greater), "{title:?}");
        }
        EpisodeRange::Combined(parts) => {
            for part in parts {
                assert_ordered(part, title);
            }
        }
        _ => {}
    }
}

fn languages(title: &str) -> Vec<SubtitleLanguage> {
    parse(title).subtitle_languages.iter().collect()
}

#[test]
fn dbd_batch_with_embedded_traditional() {
    let parsed = parse(
        "[DBD製作組][未來日記/Mirai Nikki/未来日記/みらいにっき][01-26TV全集+OVA][日版/JPN.Ver][1080P][BDRip][AVC][繁體內嵌][FLAC][MKV]",
    );
    assert_eq!(parsed.episode_range.to_string(), "01..26");
    assert_eq!(
        parsed.subtitle_languages.iter().collect::<Vec<_>>(),
        [SubtitleLanguage::ChineseTraditional, SubtitleLanguage::Japanese]
    );
    assert_eq!(parsed.resolution, Some(Resolution::FHD1080));
    assert_eq!(parsed.subtitle_kind, Some(SubtitleKind::Embedded));
}

#[test]
fn plain_range_with_ova_extra() {
    let parsed =
        parse("未来日记 Mirai Nikki 1-26+OVA [BD 1920x1080 HEVC 10bit][简繁内封字幕][2011年]");
    assert_eq!(parsed.episode_range.to_string(), "01..26+OVA");
    assert!(matches!(parsed.episode_range, EpisodeRange::Combined(ref parts) if parts.len() == 2));
    assert_eq!(parsed.render().subtitle_languages, "CHS, CHT, JPN");
    assert_eq!(parsed.resolution, Some(Resolution::FHD1080));
    assert_eq!(parsed.subtitle_kind, Some(SubtitleKind::Closed));
}

#[test]
fn batch_without_episode_marker() {
    let parsed = parse("[Moozzi2] 未來日記 Mirai Nikki (BD 1920x1080 x264 FLACx2)");
    assert_eq!(parsed.episode_range, EpisodeRange::SeasonUnknown);
    assert_eq!(languages("[Moozzi2] 未來日記 Mirai Nikki (BD 1920x1080 x264 FLACx2)"), [SubtitleLanguage::Japanese]);
    assert_eq!(parsed.resolution, Some(Resolution::FHD1080));
    assert_eq!(parsed.subtitle_kind, None);
}

#[test]
fn ova_release_with_unlisted_resolution() {
    let parsed = parse("[GotWoot] Mirai Nikki Redial [DVD 576p][1F730058] mkv 未来日记 OVA [内封英文]");
    assert_eq!(parsed.episode_range.to_string(), "OVA..OVA");
    assert_eq!(parsed.render().subtitle_languages, "ENG, JPN");
    assert_eq!(parsed.resolution, None);
    assert_eq!(parsed.subtitle_kind, Some(SubtitleKind::Closed));
}

#[test]
fn full_width_brackets_and_unlisted_dimensions() {
    let parsed = parse("【Dymy字幕組】【Mirai_Nikki_未來日記】【1-26】【BIG5】【1024X576】【MKV】");
    assert_eq!(parsed.episode_range.to_string(), "01..26");
    assert_eq!(parsed.render().subtitle_languages, "CHT, JPN");
    assert_eq!(parsed.resolution, None);
    assert_eq!(parsed.subtitle_kind, None);
}

#[test]
fn ampersand_episode_pair_is_unknown() {
    let parsed = parse("[四魂製作組][Mirai Nikki 未來日記][14&15][BIG5_GB繁簡][720P][MKV]");
    assert_eq!(parsed.episode_range, EpisodeRange::Unknown);
    assert_eq!(parsed.render().episode_range, "null");
    assert_eq!(parsed.render().subtitle_languages, "CHS, CHT, JPN");
    assert_eq!(parsed.resolution, Some(Resolution::HD720));
    assert_eq!(parsed.subtitle_kind, Some(SubtitleKind::Closed));
}

#[test]
fn web_releases_take_dash_episode() {
    let parser = TitleParser::new();
    for (title, episode) in [
        ("[ANi] Kaiju No 8 / 怪獸 8 號 - 03 [1080P][Baha][WEB-DL][AAC AVC][CHT][MP4]", "03..03"),
        ("[Lilith-Raws] 怪獸 8 號 / Kaijuu 8-gou - 06 [Baha][WebDL 1080p AVC AAC][CHT]", "06..06"),
        ("[LoliHouse] 怪兽8号 / Kaijuu 8-gou - 06 [WebRip 1080p HEVC-10bit AAC][简繁内封字幕]", "06..06"),
    ] {
        let parsed = parser.parse(title);
        assert_eq!(parsed.episode_range.to_string(), episode, "{title}");
        assert_eq!(parsed.resolution, Some(Resolution::FHD1080), "{title}");
    }
}

#[test]
fn never_panics_on_odd_input() {
    for title in [
        "",
        "[",
        "]]]",
        "【】",
        "[[[01]]]",
        "- - -",
        "第話版",
        "SP-",
        "99999-99999",
        "\u{3000}\u{3000}",
        "🎌 [01] 🎌",
    ] {
        let parsed = parse(title);
        assert!(parsed.has_language(SubtitleLanguage::Japanese), "{title:?}");
        let _ = parsed.render();
    }
}

#[test]
fn season_plus_non_ascii_part() {
    let parsed = parse("[Group][Title][S1+全集][1080p]");
    assert_eq!(parsed.render().episode_range, "S1+S?");
    assert_eq!(parsed.resolution, Some(Resolution::FHD1080));
}

#[test]
fn rule_shapes_mixed_with_non_ascii_text() {
    let prefixes = [
        "S1+", "S1+S", "S2E", "S1E05+", "SP", "SP1-", "SP01-SP", "EP01-", "E1~", "01-", "1-26+",
        "01-12+", "01_", "12～", "第", "12v", "26_", "Vol.", "Vol.1-Vol.", "BD", "OVA+", "x264 ",
        "1920x", "720", "4K", "GB", "BIG5_", "内", "外",
    ];
    let suffixes = [
        "全集", "特典映像", "話", "完", "～", "＋", "+全", "+SP特典", "é", "🎌", "\u{3000}", "（",
        "】", "１２", "١٢", "映像12", "p", "+", "-",
    ];

    for prefix in prefixes {
        for suffix in suffixes {
            for title in [
                format!("[Group][Title][{prefix}{suffix}][1080p]"),
                format!("[Group] Title - {prefix}{suffix}"),
                format!("{suffix}{prefix}"),
                format!("【{suffix}】{prefix}{suffix}"),
            ] {
                let parsed = parse(&title);
                assert!(parsed.has_language(SubtitleLanguage::Japanese), "{title:?}");
                assert_ordered(&parsed.episode_range, &title);
                let _ = parsed.render();
            }
        }
    }
}

#[test]
fn regression_fixture_is_clean() {
    let cases = load_file(fixture("regression.jsonl")).expect("fixture should load");
    let report = check(&cases);
    assert!(
        report.is_clean(),
        "mismatches:\n{}",
        report
            .mismatches
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
    assert_eq!(report.total, 11);
    assert_eq!(report.passed(), 11);
}
