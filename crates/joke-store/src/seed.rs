//! The fixed joke collection loaded into the store at startup.

use crate::Joke;

/// Seed jokes as `(id, text)` pairs, in the order they are served.
pub const SEED: &[(&str, &str)] = &[
    ("1", "Chuck Norris cannot love, he can only not kill."),
    ("2", "All browsers support the hex definitions #chuck and #norris for the colors black and blue."),
    ("3", "Chuck Norris had to stop washing his clothes in the ocean. The tsunamis were killing people."),
    ("4", "Chuck Norris can install a 64 bit OS on 32 bit machines."),
    ("5", "Fool me once, shame on you. Fool Chuck Norris once and he will roundhouse kick you in the face."),
    ("6", "Chuck Norris compresses his files by doing a flying round house kick to the hard drive."),
    ("7", "MacGyver can build an airplane out of gum and paper clips. Chuck Norris can kill him and take it."),
    ("8", "Chuck Norris played Russian Roulette with a fully loaded gun and won"),
    ("9", "Chuck Norris's keyboard doesn't have a Ctrl key because nothing controls Chuck Norris."),
    ("10", "Chuck Norris recently had the IDea to sell his urine as a canned beverage. We know this beverage as Red Bull."),
    ("11", "Chuck Norris can read from an input stream."),
    ("12", "When Chuck Norris is in a crowded area, he doesn't walk around people. He walks through them."),
    ("13", "Chuck Norris grinds his coffee with his teeth and boils the water with his own rage."),
    ("14", "The chemical formula for the highly toxic cyanIDe ion is CN-. These are also Chuck Norris' initials. This is not a coincIDence."),
    ("15", "Chuck Norris doesn't use web standards as the web will conform to him."),
    ("16", "Maslow's theory of higher needs does not apply to Chuck Norris. He only has two needs: killing people and finding people to kill."),
    ("17", "Chuck Norris dID in fact, build Rome in a day."),
    ("18", "Chuck Norris doesn't use Oracle, he is the Oracle."),
    ("19", "They say curiosity killed the cat. This is false. Chuck Norris killed the cat. Every single one of them."),
    ("20", "A Chuck Norris-delivered Roundhouse Kick is the preferred method of execution in 16 states."),
    ("21", "Chuck Norris is the only person in the world that can actually email a roundhouse kick."),
    ("22", "Product Owners never ask Chuck Norris for more features. They ask for mercy."),
    ("23", "Chuck Norris is the only person to ever win a staring contest against Ray Charles and Stevie Wonder."),
    ("24", "Chuck Norris doesn't need an OS."),
    ("25", "Chuck Norris doesn't need garbage collection because he doesn't call .Dispose(), he calls .DropKick()."),
    ("26", "Chuck Norris ordered a Big Mac at Burger King, and got one."),
    ("27", "Chuck Norris is not Politically Correct. He is just Correct. Always."),
    ("28", "One time, at band camp, Chuck Norris ate a percussionist."),
    ("29", "Chuck Norris doesn't need to use AJAX because pages are too afraID to postback anyways."),
    ("30", "Chuck Norris knows everything there is to know - Except for the definition of mercy."),
    ("31", "DivIDe Chuck Norris by zero and you will in fact get one........one bad-ass that is."),
    ("32", "Chuck Norris' unit tests don't run. They die."),
    ("33", "The Drummer for Def Leppard's only got one arm. Chuck Norris needed a back scratcher."),
    ("34", "Chuck Norris' programs never exit, they terminate."),
    ("35", "Chuck Norris can write multi-threaded applications with a single thread."),
    ("36", "Chuck Norris does not need to know about class factory pattern. He can instantiate interfaces."),
    ("37", "If you work in an office with Chuck Norris, don't ask him for his three-hole-punch."),
    ("38", "Chuck Norris uses tabasco sauce instead of visine."),
    ("39", "When Chuck Norris break the build, you can't fix it, because there is not a single line of code left."),
    ("40", "Chuck Norris can make a class that is both abstract and final."),
    ("41", "When Chuck Norris does a pushup, he isn't lifting himself up, he's pushing the Earth down."),
    ("42", "As an infant, Chuck Norris' parents gave him a toy hammer. He gave the world Stonehenge."),
    ("43", "Little Miss Muffet sat on her tuffet, until Chuck Norris roundhouse kicked her into a glacier."),
    ("44", "The quickest way to a man's heart is with Chuck Norris' fist."),
    ("45", "Code runs faster when Chuck Norris watches it."),
    ("46", "If you spell Chuck Norris in Scrabble, you win. Forever."),
    ("47", "TNT was originally developed by Chuck Norris to cure indigestion."),
    ("48", "July 4th is Independence day. And the day Chuck Norris was born. CoincIDence? I think not."),
    ("49", "In a fight between Batman and Darth Vader, the winner would be Chuck Norris."),
    ("50", "When Chuck Norris does division, there are no remainders."),
    ("51", "If Chuck Norris writes code with bugs, the bugs fix themselves."),
    ("52", "Jean-Claude Van Damme once kicked Chuck Norris' ass. He was then awakened from his dream by a roundhouse kick to the face."),
    ("53", "If you try to kill -9 Chuck Norris's programs, it backfires."),
    ("54", "Chuck Norris can unit test entire applications with a single assert."),
    ("55", "Chuck Norris knows the value of NULL, and he can sort by it too."),
    ("56", "Chuck Norris invented black. In fact, he invented the entire spectrum of visible light Except pink. Tom Cruise invented pink."),
    ("57", "Chuck Norris can lead a horse to water AND make it drink."),
    ("58", "Chuck Norris's first program was kill -9."),
    ("59", "Chuck Norris once participated in the running of the bulls. He walked."),
    ("60", "Chuck Norris's log statements are always at the FATAL level."),
    ("61", "One time, Chuck Norris accIDentally stubbed his toe. It destroyed the entire state of Ohio."),
    ("62", "Chuck Norris doesn't chew gum. Chuck Norris chews tin foil."),
    ("63", "If tapped, a Chuck Norris roundhouse kick could power the country of Australia for 44 minutes."),
    ("64", "Chuck Norris doesn't churn butter. He roundhouse kicks the cows and the butter comes straight out."),
    ("65", "Chuck Norris does not need to type-cast. The Chuck-Norris Compiler (CNC) sees through things. All way down. Always."),
    ("66", "Chuck Norris has banned rainbows from the state of North Dakota."),
    ("67", "Bill Gates thinks he's Chuck Norris. Chuck Norris actually laughed. Once."),
    ("68", "Chuck Norris once ate an entire bottle of sleeping pills. They made him blink."),
    ("69", "Chuck Norris's brain waves are suspected to be harmful to cell phones."),
    ("70", "Aliens DO indeed exist. They just know better than to visit a planet that Chuck Norris is on."),
    ("71", "What was going through the minds of all of Chuck Norris' victims before they died? His shoe."),
    ("72", "Chuck Norris can write infinite recursion functions and have them return."),
    ("73", "Chuck Norris doesn't use reflection, reflection asks politely for his help."),
    ("74", "Chuck Norris crossed the road. No one has ever dared question his motives."),
    ("75", "Chuck Norris puts his pants on one leg at a time, just like the rest of us. The only difference is, then he kills people."),
    ("76", "Chuck Norris can set ants on fire with a magnifying glass. At night."),
    ("77", "Only Chuck Norris can prevent forest fires."),
    ("78", "Chuck Norris likes his coffee half and half: half coffee grounds, half wood-grain alcohol."),
    ("79", "Ninjas want to grow up to be just like Chuck Norris. But usually they grow up just to be killed by Chuck Norris."),
    ("80", "Chuck Norris's show is called Walker: Texas Ranger, because Chuck Norris doesn't run."),
    ("81", "Simply by pulling on both ends, Chuck Norris can stretch diamonds back into coal."),
    ("82", "It takes 14 puppeteers to make Chuck Norris smile, but only 2 to make him destroy an orphanage."),
    ("83", "Chuck Norris brushes his teeth with a mixture of iron shavings, industrial paint remover and wood-grain alcohol.   "),
    ("84", "Industrial logging isn't the cause of deforestation. Chuck Norris needs toothpicks."),
    ("85", "Chuck Norris doesn't do Burn Down charts, he does Smack Down charts."),
    ("86", "If Chuck Norris wants your opinion, he'll beat it into you."),
    ("87", "On his birthday, Chuck Norris randomly selects one lucky child to be thrown into the sun."),
    ("88", "Chuck Norris doesn't bowl strikes, he just knocks down one pin and the other nine faint."),
    ("89", "According to Einstein's theory of relativity, Chuck Norris can actually roundhouse kick you yesterday."),
    ("90", "Chuck Norris' first job was as a paperboy. There were no survivors."),
    ("91", "Chuck Norris does infinite loops in 4 seconds."),
    ("92", "Chuck Norris doesn't pair program."),
    ("93", "Paper beats rock, rock beats scissors, and scissors beats paper, but Chuck Norris beats all 3 at the same time."),
    ("94", "Chuck Norris qualified with a top speed of 324 mph at the Daytona 500, without a car."),
    ("95", "Count from one to ten. That's how long it would take Chuck Norris to kill you...Fourty seven times."),
    ("96", "Chuck Norris insists on strongly-typed programming languages."),
    ("97", "All arrays Chuck Norris declares are of infinite size, because Chuck Norris knows no bounds."),
    ("98", "PresIDent Roosevelt once rode his horse 100 miles. Chuck Norris carried his the same distance in half the time."),
    ("99", "Chuck Norris doesn't actually write books, the words assemble themselves out of fear."),
    ("100", "A study showed the leading causes of death in the United States are: 1. Heart disease, 2. Chuck Norris, 3. Cancer"),
    ("101", "When Chuck Norris plays Monopoly, it affects the actual world economy."),
    ("102", "Superman once watched an episode of Walker, Texas Ranger. He then cried himself to sleep."),
    ("103", "Godzilla is a Japanese rendition of Chuck Norris' first visit to Tokyo."),
    ("104", "The class object inherits from Chuck Norris"),
    ("105", "Everybody loves Raymond. Except Chuck Norris."),
    ("106", "Chuck Norris is the reason why Waldo is hIDing."),
    ("107", "Two wrongs don't make a right. Unless you're Chuck Norris. Then two wrongs make a roundhouse kick to the face"),
    ("108", "Chuck Norris once pulled out a single hair from his beard and skewered three men through the heart with it."),
    ("109", "Police label anyone attacking Chuck Norris as a Code 45-11.... A suicIDe."),
    ("110", "Chuck Norris can slam a revolving door."),
    ("111", "Ozzy Osbourne bites the heads off of bats. Chuck Norris bites the heads off of Siberian Tigers."),
    ("112", "Chuck Norris could use anything in java.util.* to kill you, including the javadocs."),
    ("113", "When Chuck Norris goes to donate blood, he declines the syringe, and instead requests a hand gun and a bucket."),
    ("114", "Chuck Norris doesn't daydream. He's too busy giving other people nightmares."),
    ("115", "Chuck Norris doesn't need a debugger, he just stares down the bug until the code confesses."),
    ("116", "Sticks and stones may break your bones, but a Chuck Norris glare will liquefy your kIDneys."),
    ("117", "The First rule of Chuck Norris is: you do not talk about Chuck Norris."),
    ("118", "Chuck Norris doesn't wear a watch, HE decIDes what time it is."),
    ("119", "Chuck Norris causes the Windows Blue Screen of Death."),
    ("120", "Chuck Norris can compile syntax errors."),
    ("121", "Chuck Norris once kicked a horse in the chin. Its decendants are known today as Giraffes."),
    ("122", "There are no such things as tornadoes. Chuck Norris just hates trailer parks."),
    ("123", "Chuck Norris is the only man who has, literally, beaten the odds. With his fists."),
    ("124", "Chuck Norris counted to infinity. Twice."),
    ("125", "Chuck Norris can put out a fire with a gallon of gasoline."),
    ("126", "Death once had a near-Chuck-Norris experience."),
    ("127", "Chuck Norris can kill your imaginary friends."),
    ("128", "Chuck Norris can hear sign language."),
    ("129", "Chuck Norris beat the sun in a staring contest."),
    ("130", "When Graham Bell invented the telephone, he had two missed calls from Chuck Norris"),
    ("131", "Chuck Norris doesn't flush the toilet, he scares the shit out of it."),
    ("132", "Chuck Norris is so bad, when he slices onions, the onions cry."),
    ("133", "Chuck Norris knows how to exit VIM"),
    ("134", "All the codes Chuck Norris wrote is cross platform and can be run on any electronic device or quantum computer"),
];

/// Returns the seed collection as owned records.
pub fn jokes() -> Vec<Joke> {
    SEED.iter().map(|&(id, text)| Joke::new(id, text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_134_jokes_in_id_order() {
        let jokes = jokes();
        assert_eq!(jokes.len(), 134);
        for (index, joke) in jokes.iter().enumerate() {
            assert_eq!(joke.id, (index + 1).to_string());
        }
    }

    #[test]
    fn seed_texts_are_not_blank() {
        assert!(SEED.iter().all(|(_, text)| !text.trim().is_empty()));
    }
}
