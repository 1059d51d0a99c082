use crate::constants::MAX_NAMED_EXPONENT;

/// Short-scale names for every multiple of three from `10^0` to `10^333`,
/// indexed by `exponent / 3`.
pub static EXPONENT_NAMES: [&str; (MAX_NAMED_EXPONENT / 3 + 1) as usize] = [
    "", // 10^0
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion", // 10^30
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sedecillion",
    "septendecillion",
    "octodecillion",
    "novendecillion", // 10^60
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "tresvigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
    "sesvigintillion",
    "septemvigintillion",
    "octovigintillion",
    "novemvigintillion", // 10^90
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
    "trestrigintillion",
    "quattuortrigintillion",
    "quintrigintillion",
    "sestrigintillion",
    "septentrigintillion",
    "octotrigintillion",
    "noventrigintillion", // 10^120
    "quadragintillion",
    "unquadragintillion",
    "duoquadragintillion",
    "tresquadragintillion",
    "quattuorquadragintillion",
    "quinquadragintillion",
    "sesquadragintillion",
    "septenquadragintillion",
    "octoquadragintillion",
    "novenquadragintillion", // 10^150
    "quinquagintillion",
    "unquinquagintillion",
    "duoquinquagintillion",
    "tresquinquagintillion",
    "quattuorquinquagintillion",
    "quinquinquagintillion",
    "sesquinquagintillion",
    "septenquinquagintillion",
    "octoquinquagintillion",
    "novenquinquagintillion", // 10^180
    "sexagintillion",
    "unsexagintillion",
    "duosexagintillion",
    "tresexagintillion",
    "quattuorsexagintillion",
    "quinsexagintillion",
    "sesexagintillion",
    "septensexagintillion",
    "octosexagintillion",
    "novensexagintillion", // 10^210
    "septuagintillion",
    "unseptuagintillion",
    "duoseptuagintillion",
    "treseptuagintillion",
    "quattuorseptuagintillion",
    "quinseptuagintillion",
    "seseptuagintillion",
    "septenseptuagintillion",
    "octoseptuagintillion",
    "novenseptuagintillion", // 10^240
    "octogintillion",
    "unoctogintillion",
    "duooctogintillion",
    "tresoctogintillion",
    "quattuoroctogintillion",
    "quinoctogintillion",
    "sexoctogintillion",
    "septemoctogintillion",
    "octooctogintillion",
    "novemoctogintillion", // 10^270
    "nonagintillion",
    "unnonagintillion",
    "duononagintillion",
    "trenonagintillion",
    "quattuornonagintillion",
    "quinnonagintillion",
    "senonagintillion",
    "septenonagintillion",
    "octononagintillion",
    "novenonagintillion", // 10^300
    "centillion",
    "uncentillion",
    "duocentillion",
    "trescentillion",
    "quattuorcentillion",
    "quincentillion",
    "sexcentillion",
    "septencentillion",
    "octocentillion",
    "novencentillion", // 10^330
    "decicentillion",
];

/// Returns the name of `10^exponent`, or `""` when the exponent is zero, negative,
/// not a multiple of three, or past the end of the table.
pub fn exponent_name(exponent: i32) -> &'static str {
    if !(0..=MAX_NAMED_EXPONENT).contains(&exponent) || exponent % 3 != 0 {
        return "";
    }
    EXPONENT_NAMES[(exponent / 3) as usize]
}

/// Looks up the exponent for a magnitude name. The empty name has no exponent.
pub fn exponent_for_name(name: &str) -> Option<i32> {
    if name.is_empty() { return None; }
    EXPONENT_NAMES
        .iter()
        .position(|entry| *entry == name)
        .map(|idx| idx as i32 * 3)
}
