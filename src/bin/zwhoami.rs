// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

zcore::bin!(z_zwhoami);
