use super::*;

// =============================================================================
// INDIVIDUAL PASSES
// =============================================================================

#[test]
fn filler_is_removed() {
    assert_eq!(remove_filler("Please draw a circle"), " draw a circle");
    assert_eq!(remove_filler("can you draw"), " draw");
    assert_eq!(remove_filler("I would like to draw"), " draw");
}

#[test]
fn actions_map_to_draw() {
    assert_eq!(normalize_actions("create a circle"), "draw circle");
    assert_eq!(normalize_actions("Make an rectangle"), "draw rectangle");
    assert_eq!(normalize_actions("draw a line"), "draw line");
    assert_eq!(normalize_actions("place square"), "draw rectangle");
}

#[test]
fn article_is_only_dropped_as_a_whole_word() {
    assert_eq!(normalize_actions("draw another"), "draw another");
}

#[test]
fn position_words() {
    assert_eq!(normalize_actions("square at position 1,2"), "rectangle at 1,2");
    assert_eq!(normalize_actions("line from position 1 2 to position 3 4"), "line from 1 2 to 3 4");
    assert_eq!(normalize_actions("circle position 1,2"), "circle at 1,2");
}

#[test]
fn size_and_color_phrases() {
    assert_eq!(normalize_actions("with size 5,5"), "with 5,5");
    assert_eq!(normalize_actions("of size 5,5"), "with 5,5");
    assert_eq!(normalize_actions("in red"), "color red");
    assert_eq!(normalize_actions("using blue"), "color blue");
    assert_eq!(normalize_actions("with color green"), "color green");
    assert_eq!(normalize_actions("colored green"), "color green");
}

#[test]
fn hundreds_with_and_without_suffix() {
    assert_eq!(words_to_numbers("three hundred and twenty five"), "325");
    assert_eq!(words_to_numbers("two hundred fifty"), "250");
    assert_eq!(words_to_numbers("one hundred"), "100");
    assert_eq!(words_to_numbers("nine hundred ninety-nine"), "999");
    assert_eq!(words_to_numbers("four hundred and twelve"), "412");
    assert_eq!(words_to_numbers("one hundred five"), "105");
}

#[test]
fn hundreds_leave_trailing_and_alone() {
    assert_eq!(words_to_numbers("one hundred and then"), "100 and then");
}

#[test]
fn tens_unit_pairs() {
    assert_eq!(words_to_numbers("twenty five"), "25");
    assert_eq!(words_to_numbers("Forty-Two"), "42");
}

#[test]
fn single_words() {
    assert_eq!(words_to_numbers("zero ten nineteen ninety"), "0 10 19 90");
    assert_eq!(words_to_numbers("someone often"), "someone often");
}

#[test]
fn larger_numbers_are_not_resplit() {
    assert_eq!(words_to_numbers("at one hundred comma fifty"), "at 100 comma 50");
}

#[test]
fn digits_and_letters_are_separated() {
    assert_eq!(words_to_numbers("25radius"), "25 radius");
    assert_eq!(words_to_numbers("radius25"), "radius 25");
    assert_eq!(words_to_numbers("1a2b"), "1 a 2 b");
}

#[test]
fn hex_literals_are_not_separated() {
    assert_eq!(words_to_numbers("color #ff00aa"), "color #ff00aa");
    assert_eq!(words_to_numbers("color #1a2b3c"), "color #1a2b3c");
}

#[test]
fn comma_word_becomes_symbol() {
    assert_eq!(normalize_commas("100 comma 50"), "100,50");
    assert_eq!(normalize_commas("100 Comma 50"), "100,50");
}

#[test]
fn adjacent_numbers_are_joined() {
    assert_eq!(normalize_commas("at 50 60 radius"), "at 50,60 radius");
    assert_eq!(normalize_commas("at -5 2.5"), "at -5,2.5");
    assert_eq!(normalize_commas("radius 5 color"), "radius 5 color");
}

#[test]
fn only_ascii_digits_are_numbers() {
    assert_eq!(normalize_commas("at ١ ٢ radius"), "at ١ ٢ radius");
    assert_eq!(words_to_numbers("٣radius"), "٣radius");
}

#[test]
fn hashtag_collapses_to_hex() {
    assert_eq!(normalize_hashtags("hashtag ff00aa"), "#ff00aa");
    assert_eq!(normalize_hashtags("color hashtag ff 00 aa"), "color #ff00aa");
    assert_eq!(normalize_hashtags("hashtag 1 2 3 4 5 6"), "#123456");
    assert_eq!(normalize_hashtags("hashtag 11,22 33"), "#112233");
    assert_eq!(normalize_hashtags("hashtag ff"), "hashtag ff");
}

#[test]
fn parenthesis_words() {
    assert_eq!(
        normalize_parentheses("from open paren 10,20 close paren to left parenthesis 30,40 right parenthesis"),
        "from (10,20) to (30,40)"
    );
}

#[test]
fn coordinate_phrases() {
    assert_eq!(normalize_coordinate_phrases("at 100,50 radius"), "at (100, 50) radius");
    assert_eq!(normalize_coordinate_phrases("from position 1 2 to 3,4"), "from (1, 2) to (3, 4)");
    assert_eq!(normalize_coordinate_phrases("at point 100,200"), "at (100, 200)");
}

#[test]
fn color_synonyms() {
    assert_eq!(expand_color_vocabulary("color navy"), "color blue");
    assert_eq!(expand_color_vocabulary("color Sky Blue"), "color blue");
    assert_eq!(expand_color_vocabulary("color grey"), "color gray");
    assert_eq!(expand_color_vocabulary("color forest  green"), "color green");
    assert_eq!(expand_color_vocabulary("color tangerine"), "color orange");
}

#[test]
fn rgb_becomes_hex() {
    assert_eq!(expand_color_vocabulary("color rgb(255,0,0)"), "color #ff0000");
    assert_eq!(expand_color_vocabulary("color RGB( 1 , 16 , 171 )"), "color #0110ab");
    assert_eq!(expand_color_vocabulary("rgb(300,0,0)"), "#ff0000");
}

#[test]
fn size_pairs() {
    assert_eq!(normalize_dimensions("with 50,50 color"), "width 50 height 50 color");
    assert_eq!(normalize_dimensions("of size 10 20"), "width 10 height 20");
}

#[test]
fn with_before_a_keyword_is_dropped() {
    assert_eq!(normalize_dimensions("with radius 5"), "radius 5");
    assert_eq!(normalize_dimensions("with width 5"), "width 5");
}

#[test]
fn bare_with_becomes_width() {
    assert_eq!(normalize_dimensions("color red with 3"), "color red width 3");
}

#[test]
fn by_becomes_width_and_height() {
    assert_eq!(normalize_dimensions("100 by 50"), "width 100 height 50");
    assert_eq!(normalize_dimensions("2.5 by 4"), "width 2.5 height 4");
}

#[test]
fn diameter_and_circumference() {
    assert_eq!(normalize_dimensions("diameter 40"), "radius 20");
    assert_eq!(normalize_dimensions("diameter 5"), "radius 3");
    assert_eq!(normalize_dimensions("circumference 100"), "radius 16");
}

#[test]
fn units_are_stripped() {
    assert_eq!(strip_units("radius 25 pixels"), "radius 25");
    assert_eq!(strip_units("width 10px height 5 pt"), "width 10 height 5");
    assert_eq!(strip_units("radius 1 pixel"), "radius 1");
}

#[test]
fn cleanup_parenthesizes_and_collapses() {
    assert_eq!(final_cleanup("at 100,50  radius"), "at (100, 50) radius");
    assert_eq!(final_cleanup("at (100,50)"), "at (100, 50)");
    assert_eq!(final_cleanup("  at (1.5, -2) "), "at (1.5, -2)");
}

// =============================================================================
// FULL PIPELINE
// =============================================================================

#[test]
fn passes_run_hundreds_first_and_cleanup_last() {
    let names: Vec<&str> = PASSES.iter().map(|(name, _)| *name).collect();
    assert_eq!(names.first(), Some(&"remove_filler"));
    assert_eq!(names.last(), Some(&"final_cleanup"));

    let position = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert!(position("words_to_numbers") < position("normalize_commas"));
    assert!(position("normalize_commas") < position("normalize_coordinate_phrases"));
    assert!(position("expand_color_vocabulary") < position("normalize_dimensions"));
}

#[test]
fn circle_sentence() {
    assert_eq!(
        normalize("draw a circle at one hundred comma fifty with radius twenty five color red"),
        "draw circle at (100, 50) radius 25 color red"
    );
}

#[test]
fn line_sentence() {
    assert_eq!(
        normalize("draw a line from twenty comma thirty to two hundred fifty comma three hundred color blue"),
        "draw line from (20, 30) to (250, 300) color blue"
    );
}

#[test]
fn rectangle_by_sentence() {
    let normalized = normalize("draw a rectangle 100 by 50 at 200 300 with color grey");
    assert_eq!(normalized, "draw rectangle width 100 height 50 at (200, 300) color gray");
}

#[test]
fn square_with_size_sentence() {
    assert_eq!(
        normalize("please create a square at position 200,300 with size 50,50 color navy"),
        "draw rectangle at (200, 300) width 50 height 50 color blue"
    );
}

#[test]
fn line_with_points_and_rgb() {
    assert_eq!(
        normalize("add a line from position 10 20 to point 30 40 in rgb(255,0,0)"),
        "draw line from (10, 20) to (30, 40) color #ff0000"
    );
}

#[test]
fn spoken_parentheses() {
    assert_eq!(
        normalize("draw a line from open paren 10 20 close paren to left parenthesis 30 40 right parenthesis"),
        "draw line from (10, 20) to (30, 40)"
    );
}

#[test]
fn spoken_hashtag() {
    assert_eq!(
        normalize("draw a circle at fifty comma sixty radius 5 color hashtag ff00aa"),
        "draw circle at (50, 60) radius 5 color #ff00aa"
    );
}

#[test]
fn canonical_text_is_a_fixed_point() {
    let canonical = [
        "draw circle at (10, 20) radius 5 color red",
        "draw rectangle at (0, 0) width 10.5 height 20 color #00ff00",
        "draw line from (-5, 3) to (1.5, 2.5) color #1a2b3c width 2",
        "draw line from (1, 2) to (3, 4) color blue",
    ];

    for text in canonical {
        let once = normalize(text);
        assert_eq!(once, text);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn never_fails_on_garbage() {
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("hello there"), "hello there");
}
