use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display crests for well-known clubs, keyed by the team name the featured
/// match endpoints receive. Teams missing from the table get no logo rather
/// than an error.
static TEAM_LOGOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Real Madrid",
            "https://upload.wikimedia.org/wikipedia/en/5/56/Real_Madrid_CF.svg",
        ),
        (
            "Barcelona",
            "https://upload.wikimedia.org/wikipedia/en/4/47/FC_Barcelona_%28crest%29.svg",
        ),
        (
            "Manchester United",
            "https://upload.wikimedia.org/wikipedia/en/7/7a/Manchester_United_FC_crest.svg",
        ),
        (
            "Liverpool",
            "https://upload.wikimedia.org/wikipedia/en/0/0c/Liverpool_FC.svg",
        ),
        (
            "Bayern Munich",
            "https://upload.wikimedia.org/wikipedia/en/1/1f/FC_Bayern_München_logo_%282017%29.svg",
        ),
        (
            "Juventus",
            "https://upload.wikimedia.org/wikipedia/commons/1/15/Juventus_FC_2017_logo.svg",
        ),
        (
            "Chelsea",
            "https://upload.wikimedia.org/wikipedia/en/c/cc/Chelsea_FC.svg",
        ),
        (
            "Arsenal",
            "https://upload.wikimedia.org/wikipedia/en/5/53/Arsenal_FC.svg",
        ),
        (
            "PSG",
            "https://upload.wikimedia.org/wikipedia/en/a/a7/Paris_Saint-Germain_F.C..svg",
        ),
        (
            "Inter",
            "https://upload.wikimedia.org/wikipedia/commons/0/05/FC_Internazionale_Milano_2021.svg",
        ),
        (
            "Milan",
            "https://upload.wikimedia.org/wikipedia/commons/d/d0/Logo_of_AC_Milan.svg",
        ),
        (
            "Atletico Madrid",
            "https://upload.wikimedia.org/wikipedia/en/f/f4/Atletico_Madrid_2017_logo.svg",
        ),
        (
            "Dortmund",
            "https://upload.wikimedia.org/wikipedia/commons/6/67/Borussia_Dortmund_logo.svg",
        ),
        (
            "Tottenham",
            "https://upload.wikimedia.org/wikipedia/en/b/b4/Tottenham_Hotspur.svg",
        ),
        (
            "Roma",
            "https://upload.wikimedia.org/wikipedia/en/f/f7/AS_Roma_logo_%282017%29.svg",
        ),
        (
            "Napoli",
            "https://upload.wikimedia.org/wikipedia/commons/2/2d/SSC_Napoli.svg",
        ),
        (
            "Ajax",
            "https://upload.wikimedia.org/wikipedia/en/7/79/Ajax_Amsterdam.svg",
        ),
        (
            "Porto",
            "https://upload.wikimedia.org/wikipedia/en/3/3f/FC_Porto.svg",
        ),
        (
            "Benfica",
            "https://upload.wikimedia.org/wikipedia/en/8/89/SL_Benfica_logo.svg",
        ),
        (
            "Sevilla",
            "https://upload.wikimedia.org/wikipedia/en/3/3c/Sevilla_FC_logo.svg",
        ),
        (
            "Leipzig",
            "https://upload.wikimedia.org/wikipedia/en/0/04/RB_Leipzig_2014_logo.svg",
        ),
        (
            "Leicester City",
            "https://upload.wikimedia.org/wikipedia/en/2/2d/Leicester_City_crest.svg",
        ),
        (
            "Shakhtar Donetsk",
            "https://upload.wikimedia.org/wikipedia/commons/6/6e/FC_Shakhtar_Donetsk.svg",
        ),
        (
            "Galatasaray",
            "https://upload.wikimedia.org/wikipedia/commons/8/8a/Galatasaray_Sports_Club_Logo.png",
        ),
        (
            "Fenerbahce",
            "https://upload.wikimedia.org/wikipedia/commons/9/9b/Fenerbahçe_SK.svg",
        ),
        (
            "Besiktas",
            "https://upload.wikimedia.org/wikipedia/commons/6/6e/Besiktas_JK.svg",
        ),
    ])
});

pub fn logo_url(team: &str) -> Option<&'static str> {
    TEAM_LOGOS.get(team).copied()
}
